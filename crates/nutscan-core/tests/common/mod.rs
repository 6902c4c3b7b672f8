#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use image::{ImageFormat, Rgb, RgbImage};
use nutscan_core::client::Analyzer;
use nutscan_core::config::ProgressConfig;
use nutscan_core::error::{NutscanError, Result};
use nutscan_core::image_source::png_data_url;
use nutscan_core::result::AnalysisResult;
use nutscan_core::upload::SelectedFile;

/// Build a result with the given numbers and tiny real PNG data URLs.
pub fn sample_result(score: f64, threshold: f64) -> AnalysisResult {
    let image = png_data_url(&png_bytes(4, 4));
    AnalysisResult {
        original_image: image.clone(),
        anomaly_map: image.clone(),
        overlay_image: image,
        anomaly_score: score,
        is_anomaly: score > threshold,
        confidence: if threshold > 0.0 {
            (score - threshold).abs() / threshold
        } else {
            0.5
        },
        threshold,
        processing_time: 1.234,
    }
}

/// Encode a small gradient image as PNG.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| Rgb([(x * 40) as u8, (y * 40) as u8, 128]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .expect("encoding an in-memory PNG cannot fail");
    out.into_inner()
}

pub fn sample_file() -> SelectedFile {
    SelectedFile::from_bytes(Path::new("nut_001.png"), png_bytes(8, 8))
}

/// Fast progress pacing for tests.
pub fn fast_progress() -> ProgressConfig {
    ProgressConfig {
        step: 15,
        interval_ms: 5,
        cap: 90,
        completion_hold_ms: 20,
    }
}

pub const SUCCESS_BODY: &str = r#"{
  "success": true,
  "results": {
    "originalImage": "data:image/png;base64,AAAA",
    "anomalyMap": "data:image/png;base64,BBBB",
    "overlayImage": "data:image/png;base64,CCCC",
    "contourImage": "data:image/png;base64,DDDD",
    "anomalyScore": 0.0823,
    "isAnomaly": true,
    "confidence": 0.646,
    "threshold": 0.05,
    "processingTime": 1.27
  }
}"#;

/// Analyzer that waits, then returns a scripted outcome.
pub struct ScriptedAnalyzer {
    pub delay: Duration,
    pub outcome: std::result::Result<AnalysisResult, String>,
    pub resolved: AtomicBool,
}

impl ScriptedAnalyzer {
    pub fn succeeding(delay: Duration, result: AnalysisResult) -> Self {
        Self {
            delay,
            outcome: Ok(result),
            resolved: AtomicBool::new(false),
        }
    }

    pub fn failing(delay: Duration, message: &str) -> Self {
        Self {
            delay,
            outcome: Err(message.to_string()),
            resolved: AtomicBool::new(false),
        }
    }
}

impl Analyzer for ScriptedAnalyzer {
    fn analyze(&self, _file: &SelectedFile) -> Result<AnalysisResult> {
        thread::sleep(self.delay);
        self.resolved.store(true, Ordering::SeqCst);
        match &self.outcome {
            Ok(result) => Ok(result.clone()),
            Err(message) => Err(NutscanError::Analysis(message.clone())),
        }
    }
}

/// One-shot HTTP server answering the first request with a canned response.
pub struct StubServer {
    pub url: String,
    requests: mpsc::Receiver<Vec<u8>>,
}

impl StubServer {
    pub fn respond(status_line: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let request = read_request(&mut stream);
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
                let _ = tx.send(request);
            }
        });

        Self {
            url: format!("http://{addr}/analyze"),
            requests: rx,
        }
    }

    /// The raw request the server received.
    pub fn received(&self) -> Vec<u8> {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("stub server received no request")
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn read_request(stream: &mut std::net::TcpStream) -> Vec<u8> {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut buf = Vec::new();
    let mut chunk = [0u8; 8192];
    loop {
        let n = match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        if let Some(header_end) = find(&buf, b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
            let content_length = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok());
            match content_length {
                Some(len) if buf.len() >= header_end + 4 + len => break,
                None if buf.ends_with(b"0\r\n\r\n") => break,
                _ => {}
            }
        }
    }
    buf
}

/// Contains-check on raw bytes.
pub fn bytes_contain(haystack: &[u8], needle: &str) -> bool {
    find(haystack, needle.as_bytes()).is_some()
}
