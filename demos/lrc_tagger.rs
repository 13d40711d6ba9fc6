#![allow(missing_docs)]

use lyrictag::config::{ParseOptions, WriteOptions};
use lyrictag::file::{DecodedFile, suggested_file_name};
use lyrictag::model::TagField;
use lyrictag::picture::CoverArt;

use structopt::StructOpt;

use std::path::PathBuf;

#[derive(Debug, StructOpt)]
#[structopt(name = "lrc_tagger", about = "Embed LRC lyrics and tags into an MP3 file")]
struct Opt {
	#[structopt(short, long)]
	title: Option<String>,

	#[structopt(short, long)]
	artist: Option<String>,

	#[structopt(short = "A", long)]
	album: Option<String>,

	/// LRC file to import into the first lyric group
	#[structopt(short, long, parse(from_os_str))]
	lrc: Option<PathBuf>,

	/// JPEG or PNG image to use as the front cover
	#[structopt(short, long, parse(from_os_str))]
	cover: Option<PathBuf>,

	#[structopt(parse(from_os_str))]
	path: PathBuf,
}

fn main() {
	let opt = Opt::from_args();

	let mut file = DecodedFile::read_from_path(&opt.path, ParseOptions::new())
		.expect("ERROR: Failed to read file!");

	if let Some(note) = &file.note {
		eprintln!("WARN: {note}");
	}

	let metadata = &mut file.metadata;
	for (field, value) in [
		(TagField::Title, opt.title),
		(TagField::Artist, opt.artist),
		(TagField::Album, opt.album),
	] {
		if let Some(value) = value {
			metadata.fields.set(field, value);
		}
	}

	if let Some(lrc) = opt.lrc {
		let text = std::fs::read_to_string(lrc).expect("ERROR: Failed to read LRC file!");
		let lines = lyrictag::parse_lrc(&text);

		println!("INFO: Imported {} lines", lines.len());
		metadata.lyrics.active_mut().synced = lines;
	}

	if let Some(cover) = opt.cover {
		let mime_type = match cover.extension().and_then(|e| e.to_str()) {
			Some("png") => "image/png",
			_ => "image/jpeg",
		};

		let data = std::fs::read(cover).expect("ERROR: Failed to read cover art!");
		metadata.cover_art = Some(CoverArt::new(mime_type, data));
	}

	let original_name = opt
		.path
		.file_name()
		.and_then(|n| n.to_str())
		.unwrap_or_default();
	let output = opt
		.path
		.with_file_name(suggested_file_name(metadata.fields.get(TagField::Title), original_name));

	file.save_to_path(&output, WriteOptions::default())
		.expect("ERROR: Failed to write the file!");

	println!("INFO: Wrote {}", output.display());
}
