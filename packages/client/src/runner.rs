//! Client main loop.

use agora_server::{
    domain::ParticipantName,
    infrastructure::dto::websocket::{ClientRequest, ErrorCode, ServerMessage},
};
use agora_shared::time::get_jst_timestamp;
use futures_util::{Sink, SinkExt, StreamExt};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::{command::Command, config::ClientConfig, error::ClientError, view::ChatView};

/// Connect, join, and relay between the terminal and the server until the
/// user quits or the connection drops.
///
/// # Errors
///
/// Returns `ClientError` if the name is invalid, the server rejects the join,
/// or the connection fails.
pub async fn run_client(config: ClientConfig) -> Result<(), ClientError> {
    let name = ParticipantName::new(config.name.as_str())?;

    let (ws, _) = connect_async(config.url.as_str()).await?;
    tracing::info!("Connected to {}", config.url);
    let (mut write, mut read) = ws.split();

    send_request(
        &mut write,
        &ClientRequest::Join {
            user_name: name.to_string(),
        },
    )
    .await?;

    let mut view = ChatView::new(name.as_str());
    for line in view.welcome() {
        println!("{line}");
    }

    let mut input = spawn_input_reader(format!("{name}> "));

    loop {
        tokio::select! {
            line = input.recv() => match line {
                Some(Ok(line)) => match Command::parse(&line) {
                    Command::Quit => break,
                    Command::Users => println!("{}", view.roster_line()),
                    Command::Say(text) => {
                        let request = ClientRequest::Message {
                            user_name: name.to_string(),
                            user_msg: text,
                        };
                        send_request(&mut write, &request).await?;
                    }
                },
                Some(Err(e)) => return Err(e.into()),
                // EOF or Ctrl-C
                None => break,
            },
            incoming = read.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    let message = match serde_json::from_str::<ServerMessage>(text.as_str()) {
                        Ok(message) => message,
                        Err(e) => {
                            tracing::warn!("Ignoring malformed message: {}", e);
                            continue;
                        }
                    };
                    if let Some(reason) = join_rejection(&message) {
                        return Err(ClientError::Rejected(reason));
                    }
                    println!("{}", view.apply(&message, get_jst_timestamp()));
                }
                Some(Ok(Message::Close(_))) | None => {
                    println!("{}", view.offline());
                    return Ok(());
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    println!("{}", view.offline());
                    return Err(e.into());
                }
            },
        }
    }

    send_request(
        &mut write,
        &ClientRequest::Leave {
            user_name: name.to_string(),
        },
    )
    .await?;
    write.send(Message::Close(None)).await?;
    println!("{}", view.offline());

    Ok(())
}

async fn send_request<S>(write: &mut S, request: &ClientRequest) -> Result<(), ClientError>
where
    S: Sink<Message, Error = tokio_tungstenite::tungstenite::Error> + Unpin,
{
    let json = serde_json::to_string(request)?;
    write.send(Message::Text(json.into())).await?;
    Ok(())
}

/// Errors that can only answer our join request and leave us outside the room
fn join_rejection(message: &ServerMessage) -> Option<String> {
    match message {
        ServerMessage::Error {
            code: ErrorCode::DuplicateName | ErrorCode::InvalidName,
            message,
        } => Some(message.clone()),
        _ => None,
    }
}

/// Read lines on a plain thread; rustyline blocks.
///
/// The channel closes on EOF or Ctrl-C.
fn spawn_input_reader(prompt: String) -> mpsc::UnboundedReceiver<Result<String, ReadlineError>> {
    let (tx, rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        let mut editor = match DefaultEditor::new() {
            Ok(editor) => editor,
            Err(e) => {
                let _ = tx.send(Err(e));
                return;
            }
        };

        loop {
            match editor.readline(&prompt) {
                Ok(line) => {
                    if let Err(e) = editor.add_history_entry(line.as_str()) {
                        tracing::debug!("Failed to record history: {}", e);
                    }
                    if tx.send(Ok(line)).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => {
                    let _ = tx.send(Err(e));
                    break;
                }
            }
        }
    });

    rx
}
