//! Port and firmware selection
//!
//! A value given on the command line is used as is; otherwise the operator
//! picks one from a numbered list. Either way the orchestrator only ever
//! sees the resolved value.

use std::io::{self, BufRead, Write};

use ncdflash_core::catalog;
use ncdflash_core::Channel;
use thiserror::Error;

/// Selection errors
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("No serial ports found")]
    NoPorts,
    #[error("Failed to list serial ports: {0}")]
    Enumerate(#[from] serialport::Error),
    #[error("Invalid selection \"{0}\"")]
    Invalid(String),
    #[error("Failed to read selection: {0}")]
    Io(#[from] io::Error),
}

/// A preset value or a request to ask the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Supplied on the command line
    Preset(String),
    /// Ask interactively
    Interactive,
}

impl From<Option<String>> for Selection {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(v) => Selection::Preset(v),
            None => Selection::Interactive,
        }
    }
}

/// Something that can ask the operator to pick from a list
pub trait Prompter {
    /// Show `choices` as `[key]: label` lines and return the chosen key
    fn choose(
        &mut self,
        title: &str,
        choices: &[(String, String)],
        question: &str,
    ) -> Result<String, SelectError>;
}

/// Prompts on a writer and reads the answer from a reader
pub struct StdinPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdinPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl StdinPrompter<io::StdinLock<'static>, io::Stderr> {
    /// Read from stdin, prompt on stderr so stdout stays machine-readable
    pub fn terminal() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompter for StdinPrompter<R, W> {
    fn choose(
        &mut self,
        title: &str,
        choices: &[(String, String)],
        question: &str,
    ) -> Result<String, SelectError> {
        writeln!(self.output, "{}", title)?;
        for (key, label) in choices {
            writeln!(self.output, "[{}]: {}", key, label)?;
        }
        writeln!(self.output)?;
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let answer = line.trim();

        choices
            .iter()
            .find(|(key, _)| key == answer)
            .map(|(key, _)| key.clone())
            .ok_or_else(|| SelectError::Invalid(answer.to_string()))
    }
}

/// A serial port as shown to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortInfo {
    pub name: String,
    pub kind: String,
}

/// Enumerate serial ports
pub fn list_ports() -> Result<Vec<PortInfo>, SelectError> {
    let ports = serialport::available_ports()?;
    Ok(ports
        .into_iter()
        // macOS lists every device twice; only the call-out (/dev/cu.*) side is usable
        .filter(|p| !cfg!(target_os = "macos") || !p.port_name.starts_with("/dev/tty."))
        .map(|p| {
            let kind = match p.port_type {
                serialport::SerialPortType::UsbPort(info) => {
                    format!("USB - {}", info.product.unwrap_or_else(|| "Unknown".into()))
                }
                serialport::SerialPortType::PciPort => "PCI".into(),
                serialport::SerialPortType::BluetoothPort => "Bluetooth".into(),
                serialport::SerialPortType::Unknown => "Unknown".into(),
            };
            PortInfo {
                name: p.port_name,
                kind,
            }
        })
        .collect())
}

/// Resolve the serial port from `ports`
pub fn select_port(
    selection: Selection,
    ports: &[PortInfo],
    prompter: &mut dyn Prompter,
) -> Result<String, SelectError> {
    if let Selection::Preset(port) = selection {
        return Ok(port);
    }
    if ports.is_empty() {
        return Err(SelectError::NoPorts);
    }

    let choices: Vec<(String, String)> = ports
        .iter()
        .enumerate()
        .map(|(i, p)| ((i + 1).to_string(), p.name.clone()))
        .collect();
    let key = prompter.choose(
        "Serial Port Options:",
        &choices,
        "Please enter the number of the desired Serial Port above: ",
    )?;

    // keys are 1-based positions produced above
    let index: usize = key.parse().map_err(|_| SelectError::Invalid(key.clone()))?;
    Ok(ports[index - 1].name.clone())
}

/// Resolve the firmware id from the catalog of `channel`
pub fn select_firmware(
    selection: Selection,
    channel: Channel,
    prompter: &mut dyn Prompter,
) -> Result<String, SelectError> {
    if let Selection::Preset(id) = selection {
        return Ok(id);
    }

    let choices: Vec<(String, String)> = catalog::entries(channel)
        .iter()
        .map(|p| (p.id.to_string(), p.name.to_string()))
        .collect();
    prompter.choose(
        "Firmware Choices:",
        &choices,
        "Please enter the number of the desired firmware: ",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> StdinPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        StdinPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn ports() -> Vec<PortInfo> {
        ["/dev/ttyUSB0", "/dev/ttyUSB1"]
            .iter()
            .map(|n| PortInfo {
                name: n.to_string(),
                kind: "USB - CP2102".into(),
            })
            .collect()
    }

    #[test]
    fn test_preset_skips_prompt() {
        let mut p = prompter("");
        let port = select_port(Selection::Preset("COM7".into()), &[], &mut p).unwrap();
        assert_eq!(port, "COM7");
        assert!(p.output.is_empty());
    }

    #[test]
    fn test_interactive_port_choice() {
        let mut p = prompter("2\n");
        let port = select_port(Selection::Interactive, &ports(), &mut p).unwrap();
        assert_eq!(port, "/dev/ttyUSB1");

        let shown = String::from_utf8(p.output).unwrap();
        assert!(shown.contains("[1]: /dev/ttyUSB0"));
        assert!(shown.contains("[2]: /dev/ttyUSB1"));
    }

    #[test]
    fn test_out_of_range_choice_rejected() {
        let mut p = prompter("3\n");
        assert!(matches!(
            select_port(Selection::Interactive, &ports(), &mut p),
            Err(SelectError::Invalid(s)) if s == "3"
        ));

        let mut p = prompter("0\n");
        assert!(select_port(Selection::Interactive, &ports(), &mut p).is_err());
    }

    #[test]
    fn test_no_ports() {
        let mut p = prompter("1\n");
        assert!(matches!(
            select_port(Selection::Interactive, &[], &mut p),
            Err(SelectError::NoPorts)
        ));
    }

    #[test]
    fn test_interactive_firmware_choice() {
        let mut p = prompter(" 14 \n");
        let id = select_firmware(Selection::Interactive, Channel::Stable, &mut p).unwrap();
        assert_eq!(id, "14");

        let mut p = prompter("22\n");
        assert!(select_firmware(Selection::Interactive, Channel::Stable, &mut p).is_err());

        let mut p = prompter("7\n");
        assert!(select_firmware(Selection::Interactive, Channel::Prerelease, &mut p).is_err());
    }
}
