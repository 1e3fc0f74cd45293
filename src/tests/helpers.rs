#![cfg(test)]

use sqlx::PgPool;
use uuid::Uuid;

pub fn unique_credentials() -> (String, String) {
    let id = Uuid::now_v7().as_simple().to_string();
    let username = format!("t_{}", &id[..16]);
    let email = format!("{}@test.example", &id[..16]);

    (username, email)
}

pub async fn insert_user(pool: &PgPool, username: &str, email: &str, hashed_password: &str, is_staff: bool) -> Uuid {
    let id = Uuid::now_v7();
    sqlx::query("INSERT INTO users (id, username, email, password, is_staff) VALUES ($1, $2, $3, $4, $5)")
        .bind(id)
        .bind(username)
        .bind(email)
        .bind(hashed_password)
        .bind(is_staff)
        .execute(pool)
        .await
        .expect("insert user");
    id
}

pub async fn delete_user(pool: &PgPool, user_id: Uuid) {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("delete user");
}

pub async fn insert_session(pool: &PgPool, user_id: Uuid) -> Uuid {
    let id = Uuid::now_v7();
    sqlx::query("INSERT INTO sessions (id, user_id) VALUES ($1, $2)")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await
        .expect("insert session");
    id
}

pub async fn set_last_touch(pool: &PgPool, session_id: Uuid, raw: Option<&str>) {
    sqlx::query("UPDATE sessions SET last_touch = $2 WHERE id = $1")
        .bind(session_id)
        .bind(raw)
        .execute(pool)
        .await
        .expect("set last_touch");
}

pub async fn find_session_last_touch(pool: &PgPool, session_id: Uuid) -> Option<Option<String>> {
    sqlx::query_scalar::<_, Option<String>>("SELECT last_touch FROM sessions WHERE id = $1")
        .bind(session_id)
        .fetch_optional(pool)
        .await
        .expect("find session")
}
