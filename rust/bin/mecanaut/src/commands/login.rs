//! Login / logout commands.

use std::path::Path;

use anyhow::Result;
use mecanaut_client::{AuthService, Credentials, Registration};

use super::{api_error, connect};

/// Sign in against the current context's backend and store the session.
pub async fn login(username: &str, password: &str, client_config_path: &Path) -> Result<()> {
    let (ctx, client) = connect(client_config_path)?;
    let auth = AuthService::new(client);

    let payload = auth
        .login(&Credentials::new(username, password))
        .await
        .map_err(api_error)?;

    if payload.token.is_empty() {
        anyhow::bail!("The server accepted the sign-in but returned no token.");
    }

    let name = auth
        .current_user()
        .and_then(|u| u.full_name)
        .unwrap_or_else(|| payload.username.clone());
    println!("Logged in as {}.", name);
    println!("Token saved to context \"{}\".", ctx.name);
    Ok(())
}

/// Sign a new tenant up. Does not sign in.
pub async fn register(body: &str, client_config_path: &Path) -> Result<()> {
    let registration = parse_registration(body)?;
    let (ctx, client) = connect(client_config_path)?;

    AuthService::new(client)
        .register(&registration)
        .await
        .map_err(api_error)?;

    println!("Registered \"{}\" as {}.", registration.legal_name, registration.username);
    println!(
        "Run `mecanaut login --user {}` to sign in to \"{}\".",
        registration.username, ctx.name
    );
    Ok(())
}

fn parse_registration(body: &str) -> Result<Registration> {
    let registration: Registration = serde_json::from_str(body)
        .map_err(|e| anyhow::anyhow!("Invalid registration JSON: {}", e))?;
    if registration.username.trim().is_empty() || registration.password.is_empty() {
        anyhow::bail!("Registration needs a username and a password.");
    }
    Ok(registration)
}

/// Clear the token and profile from the current context.
pub fn logout(client_config_path: &Path) -> Result<()> {
    let (ctx, client) = connect(client_config_path)?;
    AuthService::new(client).logout();
    println!("Logged out from context \"{}\".", ctx.name);
    Ok(())
}

/// Show the cached profile of the current context.
pub fn whoami(client_config_path: &Path) -> Result<()> {
    let (ctx, client) = connect(client_config_path)?;
    let auth = AuthService::new(client);

    if !auth.is_authenticated() {
        println!("Not logged in (context \"{}\").", ctx.name);
        return Ok(());
    }

    match auth.current_user() {
        Some(user) => {
            println!("User:    {} (id {})", user.username, user.id);
            if let Some(full_name) = &user.full_name {
                println!("Name:    {}", full_name);
            }
            if let Some(email) = &user.email {
                println!("Email:   {}", email);
            }
            if let Some(roles) = user.roles.as_ref().filter(|r| !r.is_empty()) {
                println!("Roles:   {}", roles.join(", "));
            }
        }
        None => println!("Logged in, no cached profile."),
    }
    println!("Context: {}", ctx.name);
    Ok(())
}
