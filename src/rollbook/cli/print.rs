use rollbook::feedback::{self, Theme};
use rollbook::model::{Profile, Record};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::styles::palette;

const LINE_WIDTH: usize = 100;
const ID_COL_WIDTH: usize = 11;
const EMAIL_COL_WIDTH: usize = 28;
const NO_ID: &str = "\u{2014}"; // em dash placeholder for contacts

/// Classifies and styles an outcome message, then prints it to stdout.
pub fn print_feedback(message: &str, theme: Theme) {
    println!("{}", render_feedback(message, theme));
}

/// Same rendering, but to stderr for failed commands.
pub fn eprint_feedback(message: &str, theme: Theme) {
    eprintln!("{}", render_feedback(message, theme));
}

pub fn print_messages(messages: &[String], theme: Theme) {
    for message in messages {
        print_feedback(message, theme);
    }
}

fn render_feedback(message: &str, theme: Theme) -> String {
    let feedback = feedback::format(message);
    let pal = palette(theme);
    let base = pal.for_kind(feedback.kind);

    let mut out = String::new();
    for span in &feedback.spans {
        let style = pal.for_span(span.kind, base);
        out.push_str(&style.apply_to(&span.text).to_string());
    }
    out
}

/// Prints records one per line: ID, name, email, then modules and tags.
pub fn print_records(records: &[Record], theme: Theme) {
    if records.is_empty() {
        println!("No records found.");
        return;
    }

    let pal = palette(theme);
    for record in records {
        let (id_str, id_style) = match record.student_id() {
            Some(id) => (id.to_string(), &pal.student_id),
            None => (NO_ID.to_string(), &pal.dim),
        };
        let id_padding = " ".repeat(ID_COL_WIDTH.saturating_sub(id_str.width()));

        let name_width = LINE_WIDTH - ID_COL_WIDTH - EMAIL_COL_WIDTH - 4;
        let name = truncate_to_width(record.name.as_str(), name_width);
        let name_padding = " ".repeat(name_width.saturating_sub(name.width()));

        let email = truncate_to_width(record.email.as_str(), EMAIL_COL_WIDTH);

        let mut extras = Vec::new();
        if let Profile::Student { modules, .. } = &record.profile {
            for module in modules {
                extras.push(pal.module_code.apply_to(module.as_str()).to_string());
            }
        }
        for tag in &record.tags {
            extras.push(pal.dim.apply_to(format!("#{}", tag)).to_string());
        }
        let extras = if extras.is_empty() {
            String::new()
        } else {
            format!("  {}", extras.join(" "))
        };

        println!(
            "  {}{}{}{}{}{}",
            id_style.apply_to(&id_str),
            id_padding,
            name,
            name_padding,
            pal.dim.apply_to(&email),
            extras
        );
    }
}

/// Prints the full detail of one record.
pub fn print_record_detail(record: &Record, theme: Theme) {
    let pal = palette(theme);

    match &record.profile {
        Profile::Student {
            student_id,
            modules,
        } => {
            println!(
                "{} ({})",
                pal.heading.apply_to(record.name.as_str()),
                pal.student_id.apply_to(student_id.as_str())
            );
            println!("Email: {}", record.email);
            let module_list = modules
                .iter()
                .map(|m| pal.module_code.apply_to(m.as_str()).to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!(
                "Modules: {}",
                if module_list.is_empty() { "-".to_string() } else { module_list }
            );
        }
        Profile::Contact { phone, address } => {
            println!("{}", pal.heading.apply_to(record.name.as_str()));
            println!("Email: {}", record.email);
            println!("Phone: {}", phone);
            println!("Address: {}", address);
        }
    }

    if !record.tags.is_empty() {
        let tags = record
            .tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");
        println!("Tags: {}", pal.dim.apply_to(&tags));
    }

    let (present, total) = record.attendance_counts();
    if total > 0 {
        println!("Attendance: {}/{} present", present, total);
        for mark in &record.attendance {
            println!("  {}  {}", mark.date, mark.status);
        }
    }

    if !record.grades.is_empty() {
        println!("Grades:");
        for (assessment, grade) in &record.grades {
            println!("  {}  {}", assessment, grade);
        }
    }

    if let Some(remark) = &record.remark {
        println!("Remark: {}", remark);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('\u{2026}');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
