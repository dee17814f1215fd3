use anyhow::Result;
use colored::Colorize;
use std::io::Write as _;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::constants::{ASSISTANT_LABEL, USER_LABEL};
use crate::models::TextGenerator;
use crate::session::{ConversationSession, Message, MessageRole, Persona};

/// Interactive consultation loop.
///
/// The loop only touches the session through its public entry points: it
/// renders snapshots, feeds lines into `set_pending_input`, and drives
/// `submit`. Everything about the dialogue itself lives in the session.
pub struct Repl {
    session: ConversationSession,
}

impl Repl {
    pub fn new(generator: Box<dyn TextGenerator>, persona: Persona) -> Self {
        Self {
            session: ConversationSession::with_persona(generator, persona),
        }
    }

    pub async fn run(mut self) -> Result<()> {
        println!("{}", "NEXUS // AUTOMATION ARCHITECT".bold());
        println!(
            "{}",
            "Type a brief and press Enter. /quit ends the consultation.".dimmed()
        );
        println!();

        if let Some(greeting) = self.session.snapshot().messages.first() {
            render_turn(greeting);
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("{} ", format!("{USER_LABEL} >").bold());
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break; // EOF
            };

            match line.trim() {
                "/quit" | "/exit" => break,
                "" => continue,
                _ => {}
            }

            self.session.set_pending_input(line);
            println!("{}", "Analysing...".dimmed());

            let seen = self.session.history().len();
            self.session.submit().await;

            for message in &self.session.snapshot().messages[seen..] {
                if message.role == MessageRole::Assistant {
                    render_turn(message);
                }
            }
            println!();
        }

        self.session.close();
        println!("{}", "Consultation ended.".dimmed());
        Ok(())
    }
}

fn render_turn(message: &Message) {
    let label = match message.role {
        MessageRole::User => USER_LABEL.bold(),
        MessageRole::Assistant => ASSISTANT_LABEL.cyan().bold(),
    };
    println!("{label}: {}", message.text);
}
