use dialoguer::{theme::ColorfulTheme, Confirm, Input};

/// Prompt the user for a yes/no answer.
pub fn confirm_action(theme: &ColorfulTheme, prompt: &str, default: bool) -> dialoguer::Result<bool> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
}

/// Prompt the user for free-form, non-empty text input.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> dialoguer::Result<String> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("a value is required")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map(|value| value.trim().to_string())
}
