use sqlx::SqlitePool;

use crate::models::User;

pub async fn create_user(
    pool: &SqlitePool,
    name: &str,
    email: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = User::new(name.to_string(), email.map(str::to_string));

    sqlx::query(
        "INSERT INTO users (id, name, email, invite_code, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.invite_code)
    .bind(&user.created_at)
    .bind(&user.updated_at)
    .execute(pool)
    .await?;

    println!("Created user:");
    println!("  ID: {}", user.id);
    println!("  Name: {}", user.name);
    println!("  Invite Code: {}", user.invite_code);

    Ok(())
}
