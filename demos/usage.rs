/* demos/usage.rs */

use std::io::Read;
use std::path::Path;

use download_response::download::{self, Options, XSendFile};
use download_response::{Disposition, mime};

fn main() {
	let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");

	match download::send_file(&manifest, &Options::default()) {
		Ok(response) => {
			println!("File download:");
			for (name, value) in response.headers() {
				println!("  {name}: {value:?}");
			}
			let mut body = String::new();
			if response.into_body().read_to_string(&mut body).is_ok() {
				println!("  body: {} bytes", body.len());
			}
		}
		Err(e) => println!("Send error: {e}"),
	}

	let options = Options::default().disposition(Disposition::Inline);
	match download::x_send_file(&manifest, &options, &XSendFile::nginx()) {
		Ok(response) => {
			println!("x-sendfile:");
			for (name, value) in response.headers() {
				println!("  {name}: {value:?}");
			}
		}
		Err(e) => println!("x-sendfile error: {e}"),
	}

	match "Inline".parse::<Disposition>() {
		Ok(d) => println!("Parsed disposition: {d}"),
		Err(e) => println!("Disposition error: {e}"),
	}

	let content_type = mime::sniff(Path::new("/nonexistent/file")).or_default();
	println!("MIME fallback: {content_type}");
}
