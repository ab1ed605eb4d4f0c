use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use gymcheck_core::ClassStatus;

#[derive(Args)]
pub struct ClassesArgs {
    #[command(subcommand)]
    pub command: ClassesCommand,
}

#[derive(Subcommand)]
pub enum ClassesCommand {
    #[command(about = "List classes matching the filters")]
    List(ClassListArgs),
    Get(ClassIdArgs),
    #[command(about = "Scheduled classes starting from now")]
    Upcoming,
    #[command(about = "Show whether a class still has spots")]
    Availability(ClassIdArgs),
    Create(ClassCreateArgs),
    Update(ClassUpdateArgs),
    Cancel(ClassCancelArgs),
    Delete(ClassIdArgs),
}

#[derive(Args)]
pub struct ClassIdArgs {
    #[arg(help = "Class ID")]
    pub id: String,
}

#[derive(Args)]
pub struct ClassListArgs {
    #[arg(long, help = "ISO-8601 lower bound on the start time")]
    pub start_date: Option<String>,
    #[arg(long, help = "ISO-8601 upper bound on the start time")]
    pub end_date: Option<String>,
    #[arg(long = "coach")]
    pub coach_id: Option<String>,
    #[arg(long, help = "scheduled, in-progress, completed or cancelled")]
    pub status: Option<ClassStatus>,
}

#[derive(Args)]
pub struct ClassCreateArgs {
    #[arg(long = "coach")]
    pub coach_id: String,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, help = "RFC 3339 start time")]
    pub start: DateTime<Utc>,
    #[arg(long, help = "RFC 3339 end time")]
    pub end: DateTime<Utc>,
    #[arg(long)]
    pub capacity: u32,
}

#[derive(Args)]
pub struct ClassUpdateArgs {
    #[arg(help = "Class ID")]
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub start: Option<DateTime<Utc>>,
    #[arg(long)]
    pub end: Option<DateTime<Utc>>,
    #[arg(long)]
    pub capacity: Option<u32>,
    #[arg(long)]
    pub status: Option<ClassStatus>,
}

#[derive(Args)]
pub struct ClassCancelArgs {
    #[arg(help = "Class ID")]
    pub id: String,
    #[arg(long)]
    pub reason: Option<String>,
}
