//! Helpers shared by the integration tests: a throwaway site and a raw HTTP client.

use cors_file_server::{
    config::Config,
    file_server::{FileServer, ShutdownHandle},
};
use std::{
    fs::{create_dir_all, remove_dir_all, write},
    io::{Read, Write},
    net::{SocketAddr, TcpStream},
    path::PathBuf,
    process,
    sync::mpsc::{Receiver, channel},
    thread,
    time::Duration,
};

pub fn site(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("cors-file-server-it-{name}-{}", process::id()));
    let _ = remove_dir_all(&root);

    create_dir_all(root.join("sub")).unwrap();
    create_dir_all(root.join("docs/nested")).unwrap();
    write(root.join("a.txt"), "hello").unwrap();
    write(root.join("sub/index.html"), "<h1>hi</h1>").unwrap();
    write(root.join("docs/B.md"), "# B").unwrap();
    write(root.join("docs/a file.txt"), "spaced").unwrap();

    root.canonicalize().unwrap()
}

pub struct Running {
    pub addr: SocketAddr,
    pub root: PathBuf,
    pub handle: ShutdownHandle,
    pub finished: Receiver<bool>,
}

/// Serves a fresh site on an ephemeral loopback port.
pub fn serve(name: &str) -> Running {
    let root = site(name);
    let server = FileServer::new(Config::with_root("127.0.0.1", 0, &root).unwrap()).unwrap();
    let addr = server.addr().unwrap();
    let handle = server.shutdown_handle();
    let (sender, finished) = channel();

    thread::spawn(move || {
        let result = server.start();
        drop(server);
        let _ = sender.send(result.is_ok());
    });

    Running {
        addr,
        root,
        handle,
        finished,
    }
}

pub struct Reply {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn header_count(&self, name: &str) -> usize {
        self.headers
            .iter()
            .filter(|(field, _)| field.eq_ignore_ascii_case(name))
            .count()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub fn request(addr: SocketAddr, method: &str, path: &str) -> Reply {
    send(
        addr,
        &format!("{method} {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n"),
    )
}

pub fn send(addr: SocketAddr, raw: &str) -> Reply {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    stream.write_all(raw.as_bytes()).unwrap();
    stream.flush().unwrap();

    let mut response = vec![];
    stream.read_to_end(&mut response).unwrap();

    let split = response
        .windows(4)
        .position(|window| window == b"\r\n\r\n")
        .expect("response has no header block");
    let head = String::from_utf8_lossy(&response[..split]).into_owned();
    let body = response[split + 4..].to_vec();

    let mut lines = head.split("\r\n");
    let status = lines
        .next()
        .and_then(|line| line.split(' ').nth(1))
        .and_then(|code| code.parse().ok())
        .expect("malformed status line");
    let headers = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(field, value)| (field.trim().to_string(), value.trim().to_string()))
        .collect();

    Reply {
        status,
        headers,
        body,
    }
}
