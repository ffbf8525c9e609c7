use tallybook_client::ClientError;

pub fn render_error(error: &ClientError) -> String {
    let steps = if error.recovery_steps.is_empty() {
        "  1. Retry the command.".to_string()
    } else {
        error
            .recovery_steps
            .iter()
            .enumerate()
            .map(|(index, step)| format!("  {}. {step}", index + 1))
            .collect::<Vec<String>>()
            .join("\n")
    };

    format!(
        "Something went wrong.\n\n  Error:    {}\n  Details:  {}\n\nWhat to do next:\n{steps}",
        error.code, error.message
    )
}
