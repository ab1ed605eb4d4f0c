use gymcheck_client::classes;
use gymcheck_core::{CreateClassRequest, GetClassesRequest, UpdateClassRequest};

use crate::cli_args::{ClassesArgs, ClassesCommand};
use crate::modules::system::{print_json, CommandContext};

pub(crate) async fn handle_classes(
    args: ClassesArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    let client = ctx.client();
    match args.command {
        ClassesCommand::List(args) => {
            let filters = GetClassesRequest {
                start_date: args.start_date,
                end_date: args.end_date,
                coach_id: args.coach_id,
                status: args.status,
            };
            print_json(&classes::list_classes(client, &filters).await?)?;
        }
        ClassesCommand::Get(args) => {
            print_json(&classes::get_class(client, &args.id).await?)?;
        }
        ClassesCommand::Upcoming => {
            print_json(&classes::upcoming_classes(client).await?)?;
        }
        ClassesCommand::Availability(args) => {
            print_json(&classes::check_availability(client, &args.id).await?)?;
        }
        ClassesCommand::Create(args) => {
            if args.end <= args.start {
                anyhow::bail!("--end must be after --start");
            }
            if args.capacity == 0 {
                anyhow::bail!("--capacity must be at least 1");
            }
            let request = CreateClassRequest {
                coach_id: args.coach_id,
                title: args.title,
                description: args.description,
                start_time: args.start,
                end_time: args.end,
                max_capacity: args.capacity,
            };
            print_json(&classes::create_class(client, &request).await?)?;
        }
        ClassesCommand::Update(args) => {
            let request = UpdateClassRequest {
                title: args.title,
                description: args.description,
                start_time: args.start,
                end_time: args.end,
                max_capacity: args.capacity,
                status: args.status,
            };
            if request.is_empty() {
                anyhow::bail!("nothing to update");
            }
            print_json(&classes::update_class(client, &args.id, &request).await?)?;
        }
        ClassesCommand::Cancel(args) => {
            let class = classes::cancel_class(client, &args.id, args.reason.as_deref()).await?;
            print_json(&class)?;
        }
        ClassesCommand::Delete(args) => {
            classes::delete_class(client, &args.id).await?;
            println!("Class deleted");
        }
    }
    Ok(())
}
