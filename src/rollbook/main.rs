use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use rollbook::api::{NewContact, NewStudent, RecordEdit, RollbookApi};
use rollbook::commands::CmdResult;
use rollbook::config::RollbookConfig;
use rollbook::error::{Result, RollbookError};
use rollbook::feedback::Theme;
use rollbook::store::json::JsonStorage;
use std::path::PathBuf;

mod args;
mod cli;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: RollbookApi,
    storage: JsonStorage,
    theme: Theme,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(&cli);
    let config = RollbookConfig::load(&data_dir)?;
    let storage = JsonStorage::new(&data_dir);
    let api = RollbookApi::from_store(storage.load()?);
    let mut ctx = AppContext {
        api,
        storage,
        theme: config.theme,
        data_dir,
    };

    match cli.command {
        Commands::Add {
            name,
            student_id,
            email,
            modules,
            tags,
        } => mutate(&mut ctx, |api| {
            api.add_student(NewStudent {
                name,
                student_id,
                email,
                modules,
                tags,
            })
        }),
        Commands::AddContact {
            name,
            phone,
            email,
            address,
            tags,
        } => mutate(&mut ctx, |api| {
            api.add_contact(NewContact {
                name,
                phone,
                email,
                address,
                tags,
            })
        }),
        Commands::Edit {
            student_id,
            name,
            email,
            new_id,
            modules,
        } => mutate(&mut ctx, |api| {
            api.edit(
                &student_id,
                RecordEdit {
                    name,
                    email,
                    student_id: new_id,
                    modules,
                },
            )
        }),
        Commands::Delete { student_id } => mutate(&mut ctx, |api| api.delete(&student_id)),
        Commands::Attendance {
            student_id,
            date,
            status,
        } => mutate(&mut ctx, |api| api.mark_attendance(&student_id, &date, &status)),
        Commands::Grade {
            student_id,
            assessment,
            grade,
        } => mutate(&mut ctx, |api| api.set_grade(&student_id, &assessment, &grade)),
        Commands::DeleteGrade {
            student_id,
            assessment,
        } => mutate(&mut ctx, |api| api.delete_grade(&student_id, &assessment)),
        Commands::Remark { student_id, remark } => {
            mutate(&mut ctx, |api| api.remark(&student_id, remark.as_deref()))
        }
        Commands::Tag { student_id, tags } => mutate(&mut ctx, |api| api.tag(&student_id, &tags)),
        Commands::Untag { student_id, tags } => {
            mutate(&mut ctx, |api| api.untag(&student_id, &tags))
        }
        Commands::Clear => mutate(&mut ctx, |api| api.clear()),
        Commands::List => handle_list(&ctx),
        Commands::View { student_id } => handle_view(&ctx, &student_id),
        Commands::Find { query } => handle_find(&ctx, query.as_deref().unwrap_or("")),
        Commands::Filter { tags } => handle_filter(&ctx, &tags),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn resolve_data_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.data_dir {
        return dir.clone();
    }
    let proj_dirs =
        ProjectDirs::from("com", "rollbook", "rollbook").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

/// Runs a mutating command, persists the store on success, and prints the
/// outcome messages through the feedback formatter.
fn mutate<F>(ctx: &mut AppContext, f: F) -> Result<()>
where
    F: FnOnce(&mut RollbookApi) -> Result<CmdResult>,
{
    let result = match f(&mut ctx.api) {
        Ok(result) => result,
        Err(e) => return fail(ctx.theme, e),
    };
    ctx.storage.save(ctx.api.store())?;
    cli::print::print_messages(&result.messages, ctx.theme);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    cli::print::print_records(&result.listed, ctx.theme);
    Ok(())
}

fn handle_view(ctx: &AppContext, student_id: &str) -> Result<()> {
    match ctx.api.view(student_id) {
        Ok(result) => {
            cli::print::print_record_detail(&result.listed[0], ctx.theme);
            Ok(())
        }
        Err(e) => fail(ctx.theme, e),
    }
}

fn handle_find(ctx: &AppContext, query: &str) -> Result<()> {
    let result = ctx.api.find(query)?;
    cli::print::print_records(&result.listed, ctx.theme);
    cli::print::print_messages(&result.messages, ctx.theme);
    Ok(())
}

fn handle_filter(ctx: &AppContext, tags: &[String]) -> Result<()> {
    match ctx.api.filter(tags) {
        Ok(result) => {
            cli::print::print_records(&result.listed, ctx.theme);
            cli::print::print_messages(&result.messages, ctx.theme);
            Ok(())
        }
        Err(e) => fail(ctx.theme, e),
    }
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = RollbookConfig::load(&ctx.data_dir)?;
    match (key.as_deref(), value) {
        (None, _) => {
            println!("theme: {}", config.theme);
            Ok(())
        }
        (Some("theme"), None) => {
            println!("theme: {}", config.theme);
            Ok(())
        }
        (Some("theme"), Some(value)) => match value.parse::<Theme>() {
            Ok(theme) => {
                config.theme = theme;
                config.save(&ctx.data_dir)?;
                cli::print::print_feedback(&format!("\u{2713} Theme set to {}", theme), theme);
                Ok(())
            }
            Err(message) => fail(ctx.theme, RollbookError::Validation(message)),
        },
        (Some(other), _) => fail(
            ctx.theme,
            RollbookError::Validation(format!("Unknown config key: {}", other)),
        ),
    }
}

/// User-facing errors render through the feedback formatter and exit 1;
/// system errors (disk, serialization) bubble to main's plain handler.
fn fail(theme: Theme, e: RollbookError) -> Result<()> {
    match e {
        RollbookError::Io(_) | RollbookError::Serialization(_) => Err(e),
        user => {
            cli::print::eprint_feedback(&format!("Error: {}", user), theme);
            std::process::exit(1);
        }
    }
}
