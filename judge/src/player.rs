use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use anyhow::Context;
use concentration::Request;
use serde::Deserialize;
use tracing::trace;

use crate::recording::Recorder;

/// Something that answers protocol requests, one JSON line at a time.
pub trait Participant {
    fn name(&self) -> &str;
    /// Sends a single line, without the trailing newline.
    fn send_line(&mut self, line: &str) -> anyhow::Result<()>;
    /// Reads a single line, without the trailing newline.
    fn read_line(&mut self) -> anyhow::Result<String>;
    /// Called after the last request, to release whatever runs the participant.
    fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// A bot running in a child process, talking over its stdin/stdout.
pub struct Player {
    pub name: String,
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    // A re-usable buffer for IO.
    // Should always be empty before and after read_line().
    buf: String,
}

/// How to start a bot, as read from a JSON file.
#[derive(Clone, Debug, Deserialize)]
pub struct PlayerConfig {
    /// Display name of the bot.
    pub nick: String,
    /// The executable and its arguments.
    pub cmd: Vec<String>,
}

impl PlayerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read player config '{}'", path.display()))?;
        let config: PlayerConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid player config '{}'", path.display()))?;
        if config.cmd.is_empty() {
            anyhow::bail!("Player config '{}' has an empty cmd", path.display());
        }
        Ok(config)
    }
}

impl Player {
    pub fn new(name: &str, cmd: &[String]) -> anyhow::Result<Self> {
        let Some((executable_path, args)) = cmd.split_first() else {
            anyhow::bail!("No command given for player {}", name);
        };
        let mut child_proc = Command::new(executable_path)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("Could not start '{}'", executable_path))?;

        let stdin = child_proc.stdin.take().context("Could not access stdin")?;
        let stdout = child_proc.stdout.take().context("Could not access stdout")?;
        Ok(Self {
            name: String::from(name),
            child: child_proc,
            stdin,
            stdout: BufReader::new(stdout),
            buf: String::new(),
        })
    }

    pub fn from_config(config: &PlayerConfig) -> anyhow::Result<Self> {
        Self::new(&config.nick, &config.cmd)
    }
}

impl Participant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn send_line(&mut self, line: &str) -> anyhow::Result<()> {
        self.stdin.write_all(line.as_bytes())?;
        self.stdin.write_all(b"\n")?;
        self.stdin.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        self.buf.clear();
        let num_bytes_read = self.stdout.read_line(&mut self.buf)?;
        if num_bytes_read == 0 {
            anyhow::bail!("Player {} closed its stdout", self.name);
        }
        let line = String::from(self.buf.trim_end());
        self.buf.clear();
        Ok(line)
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        let status = self
            .child
            .wait()
            .with_context(|| format!("Could not wait for player {}", self.name))?;
        trace!(player = self.name, %status, "Player exited");
        Ok(())
    }
}

/// Sends a request and waits for the response.
pub fn perform_request<T: serde::de::DeserializeOwned + std::fmt::Debug>(
    participant: &mut dyn Participant,
    recorder: &mut Option<Recorder>,
    req: &Request,
) -> anyhow::Result<T> {
    let req_json = serde_json::to_string(req)?;
    trace!(name: "Sending request", player = participant.name(), request = %req_json);
    participant.send_line(&req_json)?;
    let serialized_response = participant.read_line()?;
    let response = serde_json::from_str::<T>(&serialized_response).with_context(|| {
        format!(
            "Invalid response from {}: {}",
            participant.name(),
            serialized_response
        )
    })?;
    trace!(name: "Received response", player = participant.name(), response = %serialized_response);

    if let Some(recorder) = recorder {
        recorder.store_request(participant.name(), req_json, serialized_response);
    }
    Ok(response)
}

/// Tells the participant to shut down and waits until it has.
/// There is no response to wait for.
pub fn say_goodbye(participant: &mut dyn Participant) -> anyhow::Result<()> {
    participant.send_line(&serde_json::to_string(&Request::Bye)?)?;
    participant.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell_player(script: &str) -> Player {
        let cmd = [String::from("sh"), String::from("-c"), String::from(script)];
        Player::new("shell", &cmd).unwrap()
    }

    #[test]
    fn goodbye_reaps_the_bot_process() {
        let mut player = shell_player("read line");
        say_goodbye(&mut player).unwrap();
        let status = player.child.try_wait().unwrap();
        assert!(status.map_or(false, |status| status.success()));
    }

    #[test]
    fn closed_stdout_is_an_error() {
        let mut player = shell_player("exit 0");
        assert!(player.read_line().is_err());
        player.finish().unwrap();
    }

    #[test]
    fn empty_command_is_rejected() {
        assert!(Player::new("nobody", &[]).is_err());
    }
}
