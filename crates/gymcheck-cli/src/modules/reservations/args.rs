use clap::{Args, Subcommand};
use gymcheck_core::ReservationStatus;

#[derive(Args)]
pub struct ReservationsArgs {
    #[command(subcommand)]
    pub command: ReservationsCommand,
}

#[derive(Subcommand)]
pub enum ReservationsCommand {
    #[command(about = "Book a spot in a class")]
    Create(ReservationCreateArgs),
    Cancel(ReservationCancelArgs),
    Get(ReservationIdArgs),
    List(ReservationListArgs),
    #[command(about = "Upcoming confirmed reservations of a member")]
    Mine(ReservationMineArgs),
    #[command(about = "Roster of a class")]
    ForClass(ReservationForClassArgs),
    #[command(about = "Reservations across a coach's classes")]
    ForCoach(ReservationForCoachArgs),
    #[command(about = "Mark a reservation as attended")]
    Attend(ReservationIdArgs),
    #[command(about = "Mark a reservation as a no-show")]
    NoShow(ReservationIdArgs),
}

#[derive(Args)]
pub struct ReservationIdArgs {
    #[arg(help = "Reservation ID")]
    pub id: String,
}

#[derive(Args)]
pub struct ReservationCreateArgs {
    #[arg(long = "class")]
    pub class_id: String,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args)]
pub struct ReservationCancelArgs {
    #[arg(help = "Reservation ID")]
    pub id: String,
    #[arg(long)]
    pub reason: Option<String>,
}

#[derive(Args)]
pub struct ReservationListArgs {
    #[arg(long = "user")]
    pub user_id: Option<String>,
    #[arg(long = "class")]
    pub class_id: Option<String>,
    #[arg(long = "coach")]
    pub coach_id: Option<String>,
    #[arg(long, help = "confirmed, cancelled, attended or no-show")]
    pub status: Option<ReservationStatus>,
    #[arg(long)]
    pub start_date: Option<String>,
    #[arg(long)]
    pub end_date: Option<String>,
}

#[derive(Args)]
pub struct ReservationMineArgs {
    #[arg(long = "user", help = "Defaults to the last signed-in user")]
    pub user_id: Option<String>,
}

#[derive(Args)]
pub struct ReservationForClassArgs {
    #[arg(help = "Class ID")]
    pub class_id: String,
}

#[derive(Args)]
pub struct ReservationForCoachArgs {
    #[arg(help = "Coach ID")]
    pub coach_id: String,
    #[arg(long)]
    pub start_date: Option<String>,
    #[arg(long)]
    pub end_date: Option<String>,
}
