use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use terra_canada::cli::{DEFAULT_ADMIN_ROLE_ID, NewAdmin, create_admin, issue_token};
use terra_canada::terra_auth::Identity;
use terra_canada::terra_config::{DatabaseConfig, JwtConfig};
use terra_canada::terra_db::{PgStoredFunctions, init_db_pool};
use terra_canada::utils::password::hash_password;

#[derive(Parser)]
#[command(name = "terra-cli")]
#[command(about = "Terra Canada CLI - Administrative tools for the Terra Canada API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an administrator account
    CreateAdmin {
        /// Login name
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Full name
        #[arg(short = 'n', long)]
        full_name: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// Id of the Administrador role
        #[arg(long, default_value_t = DEFAULT_ADMIN_ROLE_ID)]
        role_id: i32,
    },
    /// Print the bcrypt hash of a password
    HashPassword {
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Sign an access token with the configured JWT secret
    IssueToken {
        #[arg(long)]
        user_id: i32,

        #[arg(long)]
        username: String,

        #[arg(long, default_value = "Administrador")]
        role: String,

        #[arg(long, default_value_t = DEFAULT_ADMIN_ROLE_ID)]
        role_id: i32,

        /// Comma-separated permission names, e.g. pagos.leer,pagos.crear
        #[arg(long, value_delimiter = ',')]
        permissions: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateAdmin {
            username,
            email,
            full_name,
            password,
            role_id,
        } => handle_create_admin(username, email, full_name, password, role_id).await,
        Commands::HashPassword { password } => handle_hash_password(password),
        Commands::IssueToken {
            user_id,
            username,
            role,
            role_id,
            permissions,
        } => handle_issue_token(user_id, username, role, role_id, permissions),
    }
}

fn prompt_or(value: Option<String>, prompt: &str) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}

fn password_or_prompt(value: Option<String>) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?),
    }
}

async fn handle_create_admin(
    username: Option<String>,
    email: Option<String>,
    full_name: Option<String>,
    password: Option<String>,
    role_id: i32,
) -> anyhow::Result<()> {
    let admin = NewAdmin {
        nombre_usuario: prompt_or(username, "Username")?,
        correo: prompt_or(email, "Email address")?,
        nombre_completo: prompt_or(full_name, "Full name")?,
        contrasena: password_or_prompt(password)?,
        id_rol: role_id,
    };

    let config = DatabaseConfig::from_env()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?;
    let db = PgStoredFunctions::new(init_db_pool(&config).await?);

    match create_admin(&db, admin.clone()).await {
        Ok(_) => {
            println!("\n✅ Administrator created successfully!");
            println!("   Username: {}", admin.nombre_usuario.trim());
            println!("   Email: {}", admin.correo.trim());
            Ok(())
        }
        Err(e) => {
            eprintln!("\n❌ Error creating administrator: {}", e);
            std::process::exit(1);
        }
    }
}

fn handle_hash_password(password: Option<String>) -> anyhow::Result<()> {
    let password = password_or_prompt(password)?;
    let hash = hash_password(&password).map_err(|e| anyhow::anyhow!("{}", e))?;
    println!("{}", hash);
    Ok(())
}

fn handle_issue_token(
    user_id: i32,
    username: String,
    role: String,
    role_id: i32,
    permissions: Vec<String>,
) -> anyhow::Result<()> {
    let jwt_config = JwtConfig::from_env();
    if jwt_config.uses_default_secret() {
        eprintln!("⚠️  JWT_SECRET is not set; the token is signed with the placeholder secret");
    }

    let identity = Identity {
        user_id,
        email: format!("{}@localhost", username),
        full_name: username.clone(),
        username,
        role_id,
        role,
        permissions: permissions
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect(),
    };

    let issued = issue_token(&identity, &jwt_config).map_err(|e| anyhow::anyhow!("{}", e))?;
    println!("{}", issued.token);
    eprintln!("expires in {} seconds", issued.expires_in);
    Ok(())
}
