use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Collects the requests and responses of a game and writes them to a JSON file per game.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    requests: Vec<RequestToPlayer>,
}

struct RequestToPlayer {
    player: String,
    request: String,
    response: String,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            requests: Vec::new(),
        })
    }

    pub fn store_request(&mut self, player: &str, request: String, response: String) {
        self.requests.push(RequestToPlayer {
            player: String::from(player),
            request,
            response,
        });
    }

    /// Path of the file the next recording will be written to.
    pub fn next_path(&self) -> PathBuf {
        self.directory.join(format!("game_{:0>6}.json", self.num))
    }

    // The request/response are already JSON strings, and serde would escape them,
    // so the surrounding array is written by hand.
    pub fn write_game_recording(&mut self) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(File::create(self.next_path())?);
        write!(writer, "[")?;
        for (idx, req) in std::mem::take(&mut self.requests).into_iter().enumerate() {
            if idx > 0 {
                write!(writer, ",")?;
            }
            write!(
                writer,
                "\n  {{\n    \"player\": {},\n    \"request\": {},\n    \"response\": {}\n  }}",
                serde_json::to_string(&req.player)?,
                req.request,
                req.response
            )?;
        }
        write!(writer, "\n]")?;
        writer.flush()?;
        self.num += 1;
        Ok(())
    }
}
