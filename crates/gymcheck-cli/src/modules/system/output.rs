use gymcheck_client::ClientError;
use serde::Serialize;

pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Backend errors print their message followed by one line per field error.
pub(crate) fn render_error(err: &anyhow::Error) -> String {
    let Some(api) = err
        .downcast_ref::<ClientError>()
        .and_then(ClientError::as_api)
    else {
        return format!("{err:#}");
    };
    let mut rendered = format!("{} (HTTP {})", api.message, api.status_code);
    for (field, message) in api.first_field_errors() {
        rendered.push_str(&format!("\n  {field}: {message}"));
    }
    rendered
}
