#![forbid(unsafe_code)]

use super::framing::{
    TransportMode, detect_mode_from_first_line, parse_request, read_content_length_frame,
    write_response,
};
use crate::McpServer;
use std::io::{BufRead, BufReader, Write};

pub(crate) fn run_stdio(server: &mut McpServer) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let mut reader = BufReader::new(stdin.lock());
    let mut stdout = std::io::stdout().lock();
    serve(server, &mut reader, &mut stdout)
}

/// Serves requests until EOF. Framing is detected once, from the first non-blank line, and
/// every response uses the same framing.
pub(crate) fn serve<R: BufRead, W: Write>(
    server: &mut McpServer,
    reader: &mut R,
    writer: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut mode: Option<TransportMode> = None;

    loop {
        match mode {
            None => {
                let mut line = String::new();
                if reader.read_line(&mut line)? == 0 {
                    break;
                }
                let Some(detected) = detect_mode_from_first_line(&line) else {
                    continue;
                };
                tracing::debug!(mode = ?detected, "transport framing detected");
                mode = Some(detected);
                match detected {
                    TransportMode::NewlineJson => {
                        handle_body(server, writer, detected, line.trim().as_bytes())?;
                    }
                    TransportMode::ContentLength => {
                        let Some(body) = read_content_length_frame(reader, Some(line))? else {
                            break;
                        };
                        handle_body(server, writer, detected, &body)?;
                    }
                }
            }
            Some(TransportMode::NewlineJson) => {
                let mut line = String::new();
                if reader.read_line(&mut line)? == 0 {
                    break;
                }
                let raw = line.trim();
                if raw.is_empty() {
                    continue;
                }
                handle_body(server, writer, TransportMode::NewlineJson, raw.as_bytes())?;
            }
            Some(TransportMode::ContentLength) => {
                let Some(body) = read_content_length_frame(reader, None)? else {
                    break;
                };
                handle_body(server, writer, TransportMode::ContentLength, &body)?;
            }
        }
    }

    Ok(())
}

fn handle_body<W: Write>(
    server: &mut McpServer,
    writer: &mut W,
    mode: TransportMode,
    body: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    let response = match parse_request(body) {
        Ok(request) => server.handle(request),
        Err(error) => Some(error),
    };
    if let Some(response) = response {
        write_response(writer, mode, &response)?;
    }
    Ok(())
}
