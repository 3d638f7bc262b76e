// src/bin/issue_session_token.rs
//
// 外部の認証基盤なしで管理者セッションを発行するための運用ツール。
//
//   issue-session-token <username> [role] [user-id]
//
use predictor_backend::{config::AppConfig, domain::principal::Principal, utils::jwt::JwtManager};
use std::env;
use std::process;
use uuid::Uuid;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let Some(username) = args.first().filter(|name| !name.is_empty()) else {
        eprintln!("Usage: issue-session-token <username> [role] [user-id]");
        process::exit(1);
    };
    let role = args.get(1).map(String::as_str).unwrap_or("admin");

    let user_id = match args.get(2) {
        Some(raw) => match Uuid::parse_str(raw) {
            Ok(id) => id,
            Err(e) => {
                eprintln!("Error: invalid user id '{}': {}", raw, e);
                process::exit(1);
            }
        },
        None => Uuid::new_v4(),
    };

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let jwt_manager = match JwtManager::new(config.jwt.clone()) {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("Error creating JWT manager: {}", e);
            process::exit(1);
        }
    };

    let principal = Principal::new(user_id, username.as_str(), role);
    let issued = jwt_manager.generate_session_token(principal).and_then(|token| {
        let claims = jwt_manager.verify_session_token(&token)?;
        Ok((token, jwt_manager.get_expires_at(&claims)))
    });

    match issued {
        Ok((token, expires_at)) => {
            println!("\n=== Session Token Issued ===");
            println!("User ID: {}", user_id);
            println!("Username: {}", username);
            println!("Role: {}", role);
            println!("Expires at: {}", expires_at);
            println!(
                "\nUse as a bearer token or in the '{}' cookie:",
                config.session.cookie_name
            );
            println!("{}", token);
        }
        Err(e) => {
            eprintln!("Error generating session token: {}", e);
            process::exit(1);
        }
    }
}
