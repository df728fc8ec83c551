//! Session commands.

use kasira_client::AppState;

use super::CliError;

/// Log in and persist the session for later invocations.
pub async fn login(state: &AppState, username: &str, password: &str) -> Result<(), CliError> {
    state.session().login(username, password).await?;
    match state.session().handle().user() {
        Some(user) => tracing::info!("Logged in as {}", user.username),
        None => tracing::info!("Logged in"),
    }
    Ok(())
}

/// Create an account. Registration never authenticates - the operator logs
/// in as a separate step.
pub async fn register(
    state: &AppState,
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), CliError> {
    if state.session().register(username, email, password).await? {
        tracing::info!("Account created for {username} - run `kasira login` to sign in");
    }
    Ok(())
}

/// Clear the persisted session. Safe to run when already logged out.
pub fn logout(state: &AppState) {
    state.session().logout();
    tracing::info!("Logged out");
}
