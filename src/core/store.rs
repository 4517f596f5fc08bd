//! core/store.rs
//! Tag store: move a [`TagSet`] in and out of a FLAC file via metaflac.
//!
//! Public API:
//! - [`load`] exports tags to stdout and parses them.
//! - [`save`] removes every tag, then sets each one again (one launch per tag).
//! - [`remove_all`] removes every tag.
//! - [`list_vorbis_comment`] returns metaflac's raw VORBIS_COMMENT dump.
//!
//! Every operation probes `metaflac --version` first, so a missing tool
//! never gets as far as touching the file.
//!
//! Nothing here re-reads after a write. Callers keep their copy in sync.

use std::path::Path;

use tracing::info;

use super::bridge::{ToolOp, ToolRunner, ensure_available, invoke_checked};
use super::error::{Result, TagError};
use super::types::{Field, TagSet, writable_custom_line};

pub fn load<R: ToolRunner + ?Sized>(runner: &R, path: &Path) -> Result<TagSet> {
    ensure_available(runner)?;

    let out = invoke_checked(runner, ToolOp::ExportTags(path))?;
    let tags = parse_export(&out.stdout);

    info!(
        path = %path.display(),
        well_known = tags.populated_count(),
        custom = tags.custom.len(),
        "loaded tags"
    );
    Ok(tags)
}

/// Parse metaflac's export format (one `KEY=VALUE` per line).
///
/// - split at the FIRST '='
/// - well-known keys match case-insensitively; later duplicates win
/// - anything else is kept as the original, unsplit line
/// - lines without '=' are dropped
pub fn parse_export(text: &str) -> TagSet {
    let mut tags = TagSet::new();

    for line in text.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        match Field::from_key(key) {
            Some(field) => tags.set(field, value),
            None => tags.custom.push(line.to_string()),
        }
    }

    tags
}

/// The `KEY=VALUE` assignments [`save`] will write, in launch order:
/// non-empty well-known fields (field order), then writable custom lines.
pub fn save_plan(tags: &TagSet) -> Vec<String> {
    let mut plan = Vec::new();

    for (field, value) in tags.well_known() {
        let value = value.trim();
        if !value.is_empty() {
            plan.push(format!("{}={}", field.key(), value));
        }
    }

    plan.extend(
        tags.custom
            .iter()
            .filter_map(|line| writable_custom_line(line))
            .map(str::to_string),
    );

    plan
}

/// Replace the file's tags with `tags`.
///
/// Not transactional: if a set-tag launch fails after remove-all succeeded,
/// the file keeps only what was written so far and
/// [`TagError::SaveIncomplete`] says how far it got.
pub fn save<R: ToolRunner + ?Sized>(runner: &R, path: &Path, tags: &TagSet) -> Result<()> {
    ensure_available(runner)?;

    let plan = save_plan(tags);
    invoke_checked(runner, ToolOp::RemoveAllTags(path))?;

    for (written, assignment) in plan.iter().enumerate() {
        invoke_checked(runner, ToolOp::SetTag { path, assignment }).map_err(|e| {
            TagError::SaveIncomplete {
                written,
                total: plan.len(),
                source: Box::new(e),
            }
        })?;
    }

    info!(path = %path.display(), written = plan.len(), "saved tags");
    Ok(())
}

pub fn remove_all<R: ToolRunner + ?Sized>(runner: &R, path: &Path) -> Result<()> {
    ensure_available(runner)?;
    invoke_checked(runner, ToolOp::RemoveAllTags(path))?;

    info!(path = %path.display(), "removed all tags");
    Ok(())
}

pub fn list_vorbis_comment<R: ToolRunner + ?Sized>(runner: &R, path: &Path) -> Result<String> {
    ensure_available(runner)?;
    let out = invoke_checked(runner, ToolOp::ListVorbisComment(path))?;
    Ok(out.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FakeMetaflac;

    const FILE: &str = "/music/song.flac";

    fn path() -> &'static Path {
        Path::new(FILE)
    }

    #[test]
    fn test_parse_export_scenario() {
        let tags = parse_export("TITLE=Song\nARTIST=Band\nXCUSTOM=1\n");

        assert_eq!(tags.get(Field::Title), "Song");
        assert_eq!(tags.get(Field::Artist), "Band");
        assert_eq!(tags.get(Field::Album), "");
        assert_eq!(tags.populated_count(), 2);
        assert_eq!(tags.custom, vec!["XCUSTOM=1"]);
    }

    #[test]
    fn test_parse_export_counts_and_order() {
        let text = "zeta=1\ntitle=lower\nAlpha=2\nGenre=Jazz\nmid=3\nTITLE=Upper\n";
        let tags = parse_export(text);

        // 6 lines, 3 well-known keys (TITLE twice, last wins), 3 custom.
        assert_eq!(tags.populated_count(), 2);
        assert_eq!(tags.get(Field::Title), "Upper");
        assert_eq!(tags.get(Field::Genre), "Jazz");
        assert_eq!(tags.custom, vec!["zeta=1", "Alpha=2", "mid=3"]);
    }

    #[test]
    fn test_parse_export_splits_at_first_equals_only() {
        let tags = parse_export("COMMENT=a=b=c\nweird=x=y\n");
        assert_eq!(tags.get(Field::Comment), "a=b=c");
        assert_eq!(tags.custom, vec!["weird=x=y"]);
    }

    #[test]
    fn test_parse_export_drops_lines_without_equals() {
        let tags = parse_export("garbage\n\nTITLE=Ok\nalso garbage\n");
        assert_eq!(tags.get(Field::Title), "Ok");
        assert!(tags.custom.is_empty());
    }

    #[test]
    fn test_parse_export_empty_stream() {
        assert_eq!(parse_export(""), TagSet::new());
        assert!(parse_export("").is_empty());
    }

    #[test]
    fn test_parse_export_keeps_custom_case_verbatim() {
        let tags = parse_export("ReplayGain_Track_Gain=-6.1 dB\n");
        assert_eq!(tags.custom, vec!["ReplayGain_Track_Gain=-6.1 dB"]);
    }

    #[test]
    fn test_save_plan_order_and_skips() {
        let mut tags = TagSet::new();
        tags.set(Field::Isrc, "USRC17607839");
        tags.set(Field::Title, " Song ");
        tags.set(Field::Bpm, "   ");
        tags.custom = vec!["XCUSTOM=1".into(), "FOO".into(), "  ".into(), " a=b ".into()];

        assert_eq!(
            save_plan(&tags),
            vec!["TITLE=Song", "ISRC=USRC17607839", "XCUSTOM=1", "a=b"]
        );
    }

    #[test]
    fn test_load_scenario_then_save_without_artist() {
        let fake = FakeMetaflac::with_comments(&["TITLE=Song", "ARTIST=Band", "XCUSTOM=1"]);

        let mut tags = load(&fake, path()).unwrap();
        assert_eq!(tags.get(Field::Title), "Song");
        assert_eq!(tags.get(Field::Artist), "Band");
        assert_eq!(tags.custom, vec!["XCUSTOM=1"]);

        tags.set(Field::Artist, "");
        save(&fake, path(), &tags).unwrap();

        // load: probe + export; save: probe + remove + 2x set
        assert_eq!(
            fake.ops(),
            vec![
                "--version",
                "--export-tags-to=-",
                "--version",
                "--remove-all-tags",
                "--set-tag=TITLE=Song",
                "--set-tag=XCUSTOM=1",
            ]
        );
        assert!(fake.calls().iter().skip(1).all(|c| c.last().map(String::as_str) == Some(FILE)));
        assert_eq!(fake.comments(), vec!["TITLE=Song", "XCUSTOM=1"]);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let fake = FakeMetaflac::with_comments(&["ALBUM=Old", "OLDCUSTOM=gone"]);

        let mut tags = TagSet::new();
        tags.set(Field::Title, "Song");
        tags.set(Field::TrackNumber, "3");
        tags.set(Field::Album, "");
        tags.custom = vec!["FOO=bar".into(), "FOO".into(), "Mood=calm".into()];

        save(&fake, path(), &tags).unwrap();
        let reloaded = load(&fake, path()).unwrap();

        assert_eq!(reloaded, tags.normalized());
        assert_eq!(reloaded.get(Field::Album), "");
        assert_eq!(reloaded.custom, vec!["FOO=bar", "Mood=calm"]);
    }

    #[test]
    fn test_cleared_field_is_absent_after_reload() {
        let fake = FakeMetaflac::with_comments(&["GENRE=Rock", "TITLE=Song"]);

        let mut tags = load(&fake, path()).unwrap();
        tags.set(Field::Genre, "");
        save(&fake, path(), &tags).unwrap();

        let reloaded = load(&fake, path()).unwrap();
        assert_eq!(reloaded.get(Field::Genre), "");
        assert_eq!(reloaded.get(Field::Title), "Song");
    }

    #[test]
    fn test_save_twice_does_not_accumulate_duplicates() {
        let fake = FakeMetaflac::new();
        let mut tags = TagSet::new();
        tags.set(Field::Title, "Song");

        save(&fake, path(), &tags).unwrap();
        save(&fake, path(), &tags).unwrap();

        assert_eq!(fake.comments(), vec!["TITLE=Song"]);
    }

    #[test]
    fn test_missing_tool_launches_nothing() {
        let fake = FakeMetaflac::missing();
        let mut tags = TagSet::new();
        tags.set(Field::Title, "Song");

        assert!(matches!(
            save(&fake, path(), &tags),
            Err(TagError::ToolUnavailable { .. })
        ));
        assert!(matches!(
            remove_all(&fake, path()),
            Err(TagError::ToolUnavailable { .. })
        ));
        assert!(matches!(
            load(&fake, path()),
            Err(TagError::ToolUnavailable { .. })
        ));
        assert!(fake.calls().is_empty());
    }

    #[test]
    fn test_broken_probe_blocks_mutation() {
        let fake = FakeMetaflac::with_comments(&["TITLE=Keep"]);
        fake.break_version_probe();

        assert!(remove_all(&fake, path()).is_err());
        assert_eq!(fake.ops(), vec!["--version"]);
        assert_eq!(fake.comments(), vec!["TITLE=Keep"]);
    }

    #[test]
    fn test_partial_save_stops_and_reports_progress() {
        let fake = FakeMetaflac::with_comments(&["TITLE=Old"]);
        fake.fail_set_tag_after(1);

        let mut tags = TagSet::new();
        tags.set(Field::Title, "New");
        tags.set(Field::Artist, "Band");
        tags.custom = vec!["XCUSTOM=1".into()];

        let err = save(&fake, path(), &tags).unwrap_err();
        match err {
            TagError::SaveIncomplete {
                written,
                total,
                source,
            } => {
                assert_eq!(written, 1);
                assert_eq!(total, 3);
                assert!(matches!(*source, TagError::ToolExecution { action: "set tag", .. }));
            }
            other => panic!("expected SaveIncomplete, got {other:?}"),
        }

        // No rollback, and no launches after the failing one.
        assert_eq!(fake.comments(), vec!["TITLE=New"]);
        assert_eq!(
            fake.ops().last().map(String::as_str),
            Some("--set-tag=ARTIST=Band")
        );
    }

    #[test]
    fn test_remove_all_clears_file() {
        let fake = FakeMetaflac::with_comments(&["TITLE=Song", "X=1"]);
        remove_all(&fake, path()).unwrap();

        assert!(fake.comments().is_empty());
        assert!(load(&fake, path()).unwrap().is_empty());
    }

    #[test]
    fn test_list_vorbis_comment_returns_stdout() {
        let fake = FakeMetaflac::with_comments(&["TITLE=Song"]);
        let dump = list_vorbis_comment(&fake, path()).unwrap();

        assert!(dump.contains("VORBIS_COMMENT"));
        assert!(dump.contains("comment[0]: TITLE=Song"));
        assert_eq!(
            fake.calls().last().cloned().unwrap(),
            vec!["--list", "--block-type=VORBIS_COMMENT", FILE]
        );
    }
}
