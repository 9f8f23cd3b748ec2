//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

use storyline::{ImageRef, InfoBox, SceneRecord};

/// A small valid deck with three scenes; the last one has info boxes.
pub const SMALL_DECK: &str = r#"
title = "Tide Pools"
label = "Stop"

[[scenes]]
title = "Low Tide"
description = "The water pulls back and the pools appear."
image = "images/low-tide.png"
button_text = "Look Closer"

[[scenes]]
title = "Anemones"
description = "Green tentacles wave in the shallow water."
factoid = "Anemones are related to jellyfish."
image = "images/anemone.png"

[[scenes]]
title = "What We Saw"
description = "A quick recap of the walk."
image = "images/recap.png"

[[scenes.info_boxes]]
title = "Counted"
content = "Twelve anemones, three crabs."

[[scenes.info_boxes]]
title = "Next Time"
content = "Come back at the spring low tide."
"#;

/// Write `content` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Config file with file logging switched off, so tests never touch the
/// user's data directory.
pub fn quiet_config(dir: &Path) -> PathBuf {
    write_file(
        dir,
        "config.toml",
        "[logging]\nenabled = false\n\n[display]\ntheme = \"mono\"\n",
    )
}

/// `storyline` binary using the config at `config`, without colors.
pub fn storyline(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("storyline").expect("binary should build");
    cmd.env("NO_COLOR", "1").arg("--config").arg(config);
    cmd
}

/// Five records shaped like a short investigation deck.
pub fn five_records() -> Vec<SceneRecord> {
    let titles = ["Discovery", "Markings", "Ocean", "Laboratory", "Summary"];
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let mut record = SceneRecord::new(
                *title,
                format!("Description of {}", title),
                ImageRef::new(format!("img/{}.png", i)),
            )
            .expect("valid record")
            .with_button_text(format!("Next from {}", title));
            if i > 0 {
                record = record.with_factoid(format!("Fact {}", i));
            }
            if i == titles.len() - 1 {
                record = record.with_info_boxes(vec![
                    InfoBox::new("Numbers", "1,000+ dolphins"),
                    InfoBox::new("Remember", "Protect the gulf"),
                    InfoBox::new("Help", "Reduce plastic"),
                ]);
            }
            record
        })
        .collect()
}
