//! Account and session commands

use clap::Args;
use zeroize::Zeroizing;

use crate::app::App;
use crate::display::format_profile;
use crate::error::{EconomyError, EconomyResult};
use crate::forms::{LoginField, LoginForm, SignupField, SignupForm};
use crate::session::RegisterOutcome;

/// Arguments for `economy signup`
#[derive(Args)]
pub struct SignupArgs {
    /// Full name
    #[arg(short, long)]
    pub name: String,
    /// Email address
    #[arg(short, long)]
    pub email: String,
    /// Birth date (DD/MM/AAAA)
    #[arg(short, long)]
    pub birth_date: String,
    /// Password (prompted when omitted)
    #[arg(long, env = "ECONOMY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Arguments for `economy login`
#[derive(Args)]
pub struct LoginArgs {
    /// Email address
    #[arg(short, long)]
    pub email: String,
    /// Password (prompted when omitted)
    #[arg(long, env = "ECONOMY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

fn read_password(given: Option<String>, prompt: &str) -> EconomyResult<Zeroizing<String>> {
    match given {
        Some(password) => Ok(Zeroizing::new(password)),
        None => rpassword::prompt_password(prompt)
            .map(Zeroizing::new)
            .map_err(|e| EconomyError::Io(format!("Failed to read password: {}", e))),
    }
}

pub async fn handle_signup(app: &App, args: SignupArgs) -> EconomyResult<()> {
    // A password given on the command line or environment confirms itself
    let (password, confirmation) = match args.password {
        Some(password) => {
            let password = Zeroizing::new(password);
            (password.clone(), password)
        }
        None => (
            read_password(None, "Password: ")?,
            read_password(None, "Confirm password: ")?,
        ),
    };

    let mut form = SignupForm::new();
    form.update_field(SignupField::Name, args.name);
    form.update_field(SignupField::Email, args.email);
    form.update_field(SignupField::BirthDate, args.birth_date);
    form.update_field(SignupField::Password, password.as_str());
    form.update_field(SignupField::PasswordConfirmation, confirmation.as_str());
    let request = form.to_request()?;

    match app.session.register(&request).await? {
        RegisterOutcome::LoggedIn(user) => {
            println!("Account created. Logged in as {}", user.email);
        }
        RegisterOutcome::Created { message } => {
            println!(
                "{}",
                message.unwrap_or_else(|| "Account created successfully".to_string())
            );
            println!("Run 'economy login --email {}' to sign in.", request.email);
        }
    }
    Ok(())
}

pub async fn handle_login(app: &App, args: LoginArgs) -> EconomyResult<()> {
    let password = read_password(args.password, "Password: ")?;

    let mut form = LoginForm::new();
    form.update_field(LoginField::Email, args.email);
    form.update_field(LoginField::Password, password.as_str());
    let credentials = form.to_request()?;

    let user = app.session.login(&credentials).await?;
    println!("Welcome, {}!", user.first_name());
    Ok(())
}

pub async fn handle_logout(app: &App) -> EconomyResult<()> {
    app.session.restore();
    app.session.logout().await?;
    println!("Logged out.");
    Ok(())
}

/// Show the current user, re-validating the token with the backend
pub async fn handle_whoami(app: &App) -> EconomyResult<()> {
    let session = app.session.initialize().await;
    match session.user {
        Some(user) if session.is_authenticated() => {
            print!("{}", format_profile(&user));
            Ok(())
        }
        _ if session.is_authenticated() => {
            println!("Logged in (profile not available offline).");
            Ok(())
        }
        _ => Err(EconomyError::Unauthorized(
            "Not logged in. Run `economy login` first".into(),
        )),
    }
}
