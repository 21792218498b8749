//! Draft composer: the transient form behind the compose drawer.

use crate::constants::DEFAULT_OUTBOUND_TAG;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ComposerField {
    #[default]
    To,
    Subject,
    Body,
    Tags,
}

impl ComposerField {
    pub fn next(self) -> Self {
        match self {
            Self::To => Self::Subject,
            Self::Subject => Self::Body,
            Self::Body => Self::Tags,
            Self::Tags => Self::To,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::To => Self::Tags,
            Self::Subject => Self::To,
            Self::Body => Self::Subject,
            Self::Tags => Self::Body,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::To => "To",
            Self::Subject => "Subject",
            Self::Body => "Message",
            Self::Tags => "Tags",
        }
    }

    pub fn is_multiline(self) -> bool {
        self == Self::Body
    }
}

/// A submission request built from the composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub tags: Vec<String>,
    /// true files under Sent, false under Drafts
    pub send: bool,
}

impl Draft {
    /// Tags to store: the given list, or the default outbound tag when empty
    pub fn effective_tags(&self) -> Vec<String> {
        if self.tags.is_empty() {
            vec![DEFAULT_OUTBOUND_TAG.to_string()]
        } else {
            self.tags.clone()
        }
    }
}

/// Split a comma-separated tag field, trimming entries and dropping empties
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftComposer {
    pub to: String,
    pub subject: String,
    pub body: String,
    /// Raw comma-separated tag text as typed
    pub tag_input: String,
    pub field: ComposerField,
}

impl DraftComposer {
    pub fn tags(&self) -> Vec<String> {
        parse_tags(&self.tag_input)
    }

    /// Snapshot the form as a submission. `to` is trimmed; subject and body
    /// are kept as typed.
    pub fn to_draft(&self, send: bool) -> Draft {
        Draft {
            to: self.to.trim().to_string(),
            subject: self.subject.clone(),
            body: self.body.clone(),
            tags: self.tags(),
            send,
        }
    }

    pub fn value(&self, field: ComposerField) -> &str {
        match field {
            ComposerField::To => &self.to,
            ComposerField::Subject => &self.subject,
            ComposerField::Body => &self.body,
            ComposerField::Tags => &self.tag_input,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.field {
            ComposerField::To => &mut self.to,
            ComposerField::Subject => &mut self.subject,
            ComposerField::Body => &mut self.body,
            ComposerField::Tags => &mut self.tag_input,
        }
    }

    /// Append to the focused field. Newlines only land in the body.
    pub fn push_char(&mut self, c: char) {
        if c == '\n' && !self.field.is_multiline() {
            self.next_field();
            return;
        }
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_trims_and_drops_empties() {
        assert_eq!(parse_tags("a, b,,c "), ["a", "b", "c"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
        assert_eq!(parse_tags("Q1 planning"), ["Q1 planning"]);
    }

    #[test]
    fn test_effective_tags_default() {
        let composer = DraftComposer::default();
        assert_eq!(composer.to_draft(true).effective_tags(), ["outbound"]);

        let composer = DraftComposer {
            tag_input: "team".to_string(),
            ..Default::default()
        };
        assert_eq!(composer.to_draft(false).effective_tags(), ["team"]);
    }

    #[test]
    fn test_field_cycle() {
        let mut field = ComposerField::To;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, ComposerField::To);
        assert_eq!(ComposerField::To.prev(), ComposerField::Tags);
        assert_eq!(ComposerField::Body.prev().next(), ComposerField::Body);
    }

    #[test]
    fn test_typing_targets_focused_field() {
        let mut composer = DraftComposer::default();
        for c in "ana@x.io".chars() {
            composer.push_char(c);
        }
        composer.next_field();
        composer.push_char('H');
        composer.push_char('i');
        composer.backspace();

        assert_eq!(composer.to, "ana@x.io");
        assert_eq!(composer.subject, "H");
        assert_eq!(composer.value(ComposerField::Subject), "H");
    }

    #[test]
    fn test_newline_advances_single_line_fields() {
        let mut composer = DraftComposer::default();
        composer.push_char('\n');
        assert_eq!(composer.field, ComposerField::Subject);
        assert!(composer.to.is_empty());

        composer.field = ComposerField::Body;
        composer.push_char('a');
        composer.push_char('\n');
        composer.push_char('b');
        assert_eq!(composer.body, "a\nb");
        assert_eq!(composer.field, ComposerField::Body);
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut composer = DraftComposer::default();
        composer.backspace();
        assert_eq!(composer, DraftComposer::default());
    }

    #[test]
    fn test_to_draft_trims_recipient_only() {
        let composer = DraftComposer {
            to: "  bob@x.io ".to_string(),
            subject: " Hi ".to_string(),
            body: "Body".to_string(),
            tag_input: "a, b".to_string(),
            field: ComposerField::Body,
        };
        let draft = composer.to_draft(true);
        assert_eq!(draft.to, "bob@x.io");
        assert_eq!(draft.subject, " Hi ");
        assert_eq!(draft.tags, ["a", "b"]);
        assert!(draft.send);
    }
}
