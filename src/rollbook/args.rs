use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rollbook")]
#[command(about = "Student record manager for teaching assistants", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the data directory holding records.json and config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a student record
    #[command(alias = "a")]
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Student ID (e.g. A1234567X)
        #[arg(short = 'i', long = "id")]
        student_id: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Module codes, repeatable (e.g. -m CS2103T -m CS2101)
        #[arg(short, long = "module")]
        modules: Vec<String>,

        /// Tags, repeatable
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Add a generic contact record (phone and address instead of a student ID)
    AddContact {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        phone: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        address: String,

        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Edit fields of a student record
    #[command(alias = "e")]
    Edit {
        /// Student ID of the record to edit
        student_id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Replace the student ID itself
        #[arg(long = "id")]
        new_id: Option<String>,

        /// Replace the full module set, repeatable
        #[arg(long = "module")]
        modules: Option<Vec<String>>,
    },

    /// Delete a record
    #[command(alias = "rm")]
    Delete { student_id: String },

    /// List all records
    #[command(alias = "ls")]
    List,

    /// Show full details of one record
    #[command(alias = "v")]
    View { student_id: String },

    /// Find records by name substring (case-insensitive)
    Find {
        /// Empty or omitted lists everything
        query: Option<String>,
    },

    /// List records carrying all of the given tags
    Filter {
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// Mark attendance for a date
    Attendance {
        student_id: String,

        /// Date in YYYY-MM-DD form
        date: String,

        /// 'present' or 'absent'
        status: String,
    },

    /// Set a grade for an assessment
    Grade {
        student_id: String,
        assessment: String,
        grade: String,
    },

    /// Remove a grade
    #[command(name = "deletegrade")]
    DeleteGrade {
        student_id: String,
        assessment: String,
    },

    /// Set the remark for a record (omit the text to clear it)
    Remark {
        student_id: String,
        remark: Option<String>,
    },

    /// Add tags to a record
    Tag {
        student_id: String,
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// Remove tags from a record
    Untag {
        student_id: String,
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// Remove all records
    Clear,

    /// Get or set configuration (key: theme)
    Config {
        /// Configuration key (e.g., theme)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
