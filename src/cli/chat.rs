use std::fs;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::ai::chat::respond;
use crate::ai::persona::Agent;
use crate::conversations::{Message, Role, append_message, create_conversation};
use crate::core::AppConfig;
use crate::core::db::{async_db, initialize_db};

/// Console chat session playing the client role: the user's turn is
/// appended first, then the generated reply lands through the same
/// path the HTTP API uses.
pub async fn run(agent_tag: Option<String>) -> Result<()> {
    let config = AppConfig::default();
    let agent = Agent::from_tag(agent_tag.as_deref().unwrap_or_default());

    fs::create_dir_all(&config.db_path)?;
    let db = async_db(&config.db_path).await?;
    db.call(|conn| {
        initialize_db(conn).expect("DB initialization failed");
        Ok(())
    })
    .await?;

    let title = format!("Console chat with {}", agent.display_name());
    let conversation = create_conversation(&db, &title, agent).await?;
    println!("{}", conversation.messages[0].content);

    let mut rl = DefaultEditor::new().expect("Editor failed");

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let user_msg = Message::new(Role::User, line.as_str());
                append_message(&db, &conversation.id, &user_msg).await?;

                let reply = respond(
                    &db,
                    agent,
                    &line,
                    Some(&conversation.id),
                    &config.openai_api_hostname,
                    &config.openai_api_key,
                    &config.openai_model,
                )
                .await?;
                println!("{}", reply.message.content);
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
