//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `homeshell_core` linkage without the mobile runtime.
//! - Print the persisted todo list from `HOMESHELL_DB_PATH` when set.

use homeshell_core::db::open_db;
use homeshell_core::{SqliteRecordStore, StoredTodoRepository, TodoRepository};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("homeshell_core ping={}", homeshell_core::ping());
    println!("homeshell_core version={}", homeshell_core::core_version());

    let Ok(db_path) = std::env::var("HOMESHELL_DB_PATH") else {
        return ExitCode::SUCCESS;
    };
    let conn = match open_db(db_path.trim()) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };
    let repo = StoredTodoRepository::new(SqliteRecordStore::new(&conn));
    match repo.load_all() {
        Ok(todos) => {
            println!("todos={}", todos.len());
            for todo in todos {
                println!("{}\t{}\t{}", todo.id, todo.updated_at, todo.content);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to load todos: {err}");
            ExitCode::FAILURE
        }
    }
}
