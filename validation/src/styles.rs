//! Utility class strings for the labeled input and the rules combining them.

pub const CONTAINER_CLASS: &str = "w-full";
pub const LABEL_CLASS: &str = "block font-medium mb-0.5 px-0.5 text-left text-neutral-900 text-sm";

const FIELD_BASE: &str = "w-full block p-2 border rounded focus:outline-none focus:ring-1 ring-current";
const FIELD_DISABLED: &str = "bg-gray-200 cursor-not-allowed";
const FIELD_ENABLED: &str = "bg-white";
const FIELD_ERROR: &str = "border-red-500 border-2 ring-red-500";
const FIELD_OK: &str = "border-neutral-900";

// min-h-6 keeps the row height stable whether or not a message is shown.
const MESSAGE_BASE: &str = "min-h-6 text-red-500 text-xs px-0.5 pt-0.5 block leading-none";
const MESSAGE_VISIBLE: &str = "opacity-100";
const MESSAGE_HIDDEN: &str = "opacity-0";

/// Classes for the input element. Caller classes come last.
pub fn field_class(disabled: bool, has_error: bool, extra: Option<&str>) -> String {
    let mut classes = vec![
        FIELD_BASE,
        if disabled { FIELD_DISABLED } else { FIELD_ENABLED },
        if has_error { FIELD_ERROR } else { FIELD_OK },
    ];
    if let Some(extra) = extra.map(str::trim).filter(|e| !e.is_empty()) {
        classes.push(extra);
    }
    classes.join(" ")
}

pub fn message_class(has_error: bool) -> String {
    let visibility = if has_error { MESSAGE_VISIBLE } else { MESSAGE_HIDDEN };
    format!("{} {}", MESSAGE_BASE, visibility)
}

/// Target of the label's `for` attribute: id, then name, then nothing.
pub fn label_target(id: Option<&str>, name: Option<&str>) -> String {
    id.or(name).unwrap_or_default().to_string()
}

/// A label renders only when it has text.
pub fn has_label(label: Option<&str>) -> bool {
    label.is_some_and(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_class_default() {
        assert_eq!(
            field_class(false, false, None),
            "w-full block p-2 border rounded focus:outline-none focus:ring-1 ring-current bg-white border-neutral-900"
        );
    }

    #[test]
    fn test_field_class_error() {
        let class = field_class(false, true, None);
        assert!(class.contains("border-red-500 border-2 ring-red-500"));
        assert!(!class.contains("border-neutral-900"));
    }

    #[test]
    fn test_field_class_disabled_regardless_of_error() {
        for has_error in [false, true] {
            let class = field_class(true, has_error, None);
            assert!(class.contains("bg-gray-200 cursor-not-allowed"));
            assert!(!class.contains("bg-white"));
        }
    }

    #[test]
    fn test_field_class_appends_caller_class() {
        let class = field_class(false, false, Some(" font-mono "));
        assert!(class.ends_with("border-neutral-900 font-mono"));

        assert_eq!(field_class(false, false, Some("")), field_class(false, false, None));
    }

    #[test]
    fn test_message_class_visibility() {
        assert!(message_class(true).ends_with("opacity-100"));
        assert!(message_class(false).ends_with("opacity-0"));
        assert!(message_class(false).starts_with("min-h-6"));
    }

    #[test]
    fn test_label_target_precedence() {
        assert_eq!(label_target(Some("email"), Some("user_email")), "email");
        assert_eq!(label_target(None, Some("user_email")), "user_email");
        assert_eq!(label_target(None, None), "");
    }

    #[test]
    fn test_has_label() {
        assert!(has_label(Some("Email")));
        assert!(!has_label(Some("")));
        assert!(!has_label(None));
    }
}
