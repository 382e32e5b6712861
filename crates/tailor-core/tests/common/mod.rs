#![allow(dead_code)]

use std::io::{Cursor, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use image::{ImageFormat, Rgba, RgbaImage};

use tailor_core::config::DesignerConfig;
use tailor_core::designer::Designer;
use tailor_core::error::{Result, TailorError};
use tailor_core::import::decode_image;
use tailor_core::overlay::{OverlayImage, SequentialIds};
use tailor_core::removal::{BackgroundRemover, RemovalTier};

/// Encode a solid-color RGBA image as PNG.
pub fn png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(color));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// A decoded solid-color test image.
pub fn test_image(width: u32, height: u32) -> OverlayImage {
    decode_image(png_bytes(width, height, [200, 30, 30, 255])).unwrap()
}

/// Designer with default config and ids counting up from 1.
pub fn designer() -> Designer {
    Designer::with_ids(&DesignerConfig::default(), Box::new(SequentialIds::default()))
}

/// What a [`FakeRemover`] answers with.
#[derive(Clone)]
pub enum FakeReply {
    Image(Vec<u8>),
    Empty,
    Garbage,
    Status(u16),
}

/// In-process background remover that counts calls.
pub struct FakeRemover {
    pub reply: FakeReply,
    pub calls: Arc<AtomicUsize>,
}

impl FakeRemover {
    pub fn new(reply: FakeReply) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(FakeReply::Image(png_bytes(8, 8, [0, 0, 0, 0])))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BackgroundRemover for FakeRemover {
    fn remove_background(&self, image_b64: &str, _tier: RemovalTier) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert!(!image_b64.is_empty(), "payload must carry the image");
        match &self.reply {
            FakeReply::Image(bytes) => Ok(bytes.clone()),
            FakeReply::Empty => Ok(Vec::new()),
            FakeReply::Garbage => Ok(b"not an image".to_vec()),
            FakeReply::Status(status) => Err(TailorError::HttpStatus {
                status: *status,
                body: String::new(),
            }),
        }
    }
}

/// Serve a single HTTP response on a local port.
///
/// Returns the endpoint URL and a handle yielding the raw request received.
pub fn serve_once(status: &'static str, body: Vec<u8>) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/v1.0/removebg", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        let head = format!(
            "HTTP/1.1 {status}\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(&body).unwrap();
        stream.flush().unwrap();
        request
    });

    (url, handle)
}

/// Read one request: headers, then as many body bytes as Content-Length says.
fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let body_len = head
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
