use anyhow::Result;
use std::io::{self, BufRead};

use timetable_input::{Command, UserList, validate_day, validate_line, validate_user_input};

fn main() -> Result<()> {
    #[cfg(feature = "logs")]
    {
        use tracing_subscriber::{EnvFilter, fmt};
        let _ = fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init(); // ignore "already set" in tests
    }

    let users: UserList = ["alice", "bob"].into_iter().collect();

    // e.g. `echo "switch bob" | cargo run --example validate_stdin`
    for line in io::stdin().lock().lines() {
        let line = line?;
        let command = match validate_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => {
                println!("unknown command: {}", line.trim());
                continue;
            }
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        let mut tokens = line.split_whitespace().skip(1);
        let checked = match command {
            Command::Switch | Command::Compare => {
                tokens.try_for_each(|name| validate_user_input(name, &users))
            }
            Command::DeleteTask => tokens
                .nth(1)
                .map_or(Ok(()), |day| validate_day(day).map(|_| ())),
            _ => Ok(()),
        };

        match checked {
            Ok(()) => println!("ok: {command}"),
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}
