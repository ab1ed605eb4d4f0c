use gymcheck_client::reservations;
use gymcheck_core::{CancelReservationRequest, CreateReservationRequest, GetReservationsRequest};

use crate::cli_args::{ReservationsArgs, ReservationsCommand};
use crate::modules::system::{print_json, CommandContext};

pub(crate) async fn handle_reservations(
    args: ReservationsArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    let client = ctx.client();
    match args.command {
        ReservationsCommand::Create(args) => {
            let request = CreateReservationRequest {
                class_id: args.class_id,
                notes: args.notes,
            };
            let response = reservations::create_reservation(client, &request).await?;
            eprintln!("{}", response.message);
            print_json(&response.reservation)?;
        }
        ReservationsCommand::Cancel(args) => {
            let request = CancelReservationRequest {
                reservation_id: args.id,
                reason: args.reason,
            };
            reservations::cancel_reservation(client, &request).await?;
            println!("Reservation cancelled");
        }
        ReservationsCommand::Get(args) => {
            print_json(&reservations::get_reservation(client, &args.id).await?)?;
        }
        ReservationsCommand::List(args) => {
            let filters = GetReservationsRequest {
                user_id: args.user_id,
                class_id: args.class_id,
                coach_id: args.coach_id,
                status: args.status,
                start_date: args.start_date,
                end_date: args.end_date,
            };
            print_json(&reservations::list_reservations(client, &filters).await?)?;
        }
        ReservationsCommand::Mine(args) => {
            let user_id = ctx.user_id(args.user_id)?;
            print_json(&reservations::my_reservations(client, &user_id).await?)?;
        }
        ReservationsCommand::ForClass(args) => {
            print_json(&reservations::class_reservations(client, &args.class_id).await?)?;
        }
        ReservationsCommand::ForCoach(args) => {
            let list = reservations::coach_reservations(
                client,
                &args.coach_id,
                args.start_date.as_deref(),
                args.end_date.as_deref(),
            )
            .await?;
            print_json(&list)?;
        }
        ReservationsCommand::Attend(args) => {
            print_json(&reservations::mark_attended(client, &args.id).await?)?;
        }
        ReservationsCommand::NoShow(args) => {
            print_json(&reservations::mark_no_show(client, &args.id).await?)?;
        }
    }
    Ok(())
}
