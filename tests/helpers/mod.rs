#![allow(dead_code)]

use chrono::FixedOffset;
use crmview::application::CrmController;
use crmview::domain::Customer;
use crmview::infrastructure::HtmlPage;
use crmview::ports::HtmlPresenter;
use crmview::util::testing::{
    sample_customer, sample_note, MockCustomerRepository, RecordingNotifier, ScriptedConfirmer,
};

pub type TestController =
    CrmController<MockCustomerRepository, HtmlPage, RecordingNotifier, ScriptedConfirmer>;

/// Controller over a mock backend, rendering timestamps in UTC
pub fn controller(
    repository: MockCustomerRepository,
    confirmer: ScriptedConfirmer,
) -> TestController {
    CrmController::new(repository, HtmlPage::new(), RecordingNotifier::default(), confirmer)
        .with_presenter(utc_presenter())
}

pub fn utc_presenter() -> HtmlPresenter {
    HtmlPresenter::with_offset(FixedOffset::east_opt(0).expect("zero offset is valid"))
}

/// Known customers used across the controller tests
pub mod fixtures {
    use super::*;

    pub const ADA: i64 = 1;
    pub const CHARLES: i64 = 2;
    pub const GRACE: i64 = 5;

    pub fn ada() -> Customer {
        Customer {
            phone: Some("555-0100".to_string()),
            company: Some("Analytical Engines".to_string()),
            ..sample_customer(ADA, "Ada", "Lovelace")
        }
    }

    pub fn charles() -> Customer {
        sample_customer(CHARLES, "Charles", "Babbage")
    }

    /// Customer with a single note `hi` (note id 1)
    pub fn grace() -> Customer {
        Customer {
            notes: vec![sample_note(1, GRACE, "hi")],
            ..sample_customer(GRACE, "Grace", "Hopper")
        }
    }

    pub fn populated() -> MockCustomerRepository {
        MockCustomerRepository::builder()
            .with_customer(ada())
            .with_customer(charles())
            .with_customer(grace())
            .build()
    }
}

/// One-shot HTTP server standing in for the CRM API
pub mod server {
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Request as received by the one-shot server
    pub struct Captured {
        pub request_line: String,
        pub body: String,
    }

    /// Serve exactly one request with `status` and `body`, then hand back what was received
    pub fn serve_once(status: &str, body: &str) -> (String, JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let base_url = format!("http://{}/api", listener.local_addr().expect("addr"));
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream);

            let mut request_line = String::new();
            reader.read_line(&mut request_line).expect("request line");

            let mut content_length = 0;
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).expect("header");
                if header.trim().is_empty() {
                    break;
                }
                if let Some((name, value)) = header.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().expect("numeric length");
                    }
                }
            }

            let mut body = vec![0; content_length];
            reader.read_exact(&mut body).expect("body");

            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).expect("write response");
            stream.flush().expect("flush");

            Captured {
                request_line: request_line.trim().to_string(),
                body: String::from_utf8(body).expect("utf8 body"),
            }
        });

        (base_url, handle)
    }
}
