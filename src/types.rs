/// Line that opens a dynamic block
pub const BLOCK_OPEN: &str = "{";
/// Line that closes a dynamic block
pub const BLOCK_CLOSE: &str = "}";

/// Prefix written before every bulk line
pub const BULK_PREFIX: &str = "bulk: ";
/// Separator placed between commands of a bulk
pub const COMMAND_SEPARATOR: &str = ", ";

/// One input line, classified once at the boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Exactly `{`
    Open,
    /// Exactly `}`
    Close,
    /// Any other line, kept verbatim (empty lines included)
    Payload(String),
}

impl Token {
    /// Classify a line. Only exact matches are control tokens; `" {"` or
    /// `"{ "` are ordinary commands.
    pub fn classify(line: &str) -> Self {
        match line {
            BLOCK_OPEN => Token::Open,
            BLOCK_CLOSE => Token::Close,
            other => Token::Payload(other.to_string()),
        }
    }
}

/// Batching mode of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Flush whenever the pending buffer reaches the bulk size
    #[default]
    Normal,
    /// Inside `{ ... }`: size trigger disabled until the block closes
    DynamicBlock,
}

/// Sealed bulk ready to be emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bulk {
    /// 1-based position of this bulk in the run
    pub sequence: u64,
    pub commands: Vec<String>,
}

impl Bulk {
    /// Render the bulk as its output line: `bulk: a, b, c\n`.
    ///
    /// Both sinks receive exactly these bytes.
    pub fn render(&self) -> String {
        let mut line = String::from(BULK_PREFIX);
        line.push_str(&self.commands.join(COMMAND_SEPARATOR));
        line.push('\n');
        line
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Name of the log artifact for a flush at `epoch_seconds`
pub fn log_file_name(epoch_seconds: i64) -> String {
    format!("bulk{}.log", epoch_seconds)
}
