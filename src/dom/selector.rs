//! Typed selectors for the marker attributes the binder understands.
//!
//! The browser evaluates [`Selector::to_css`]; the in-memory document uses
//! [`Selector::matches`]. Both must agree, which the tests pin down.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// `.class`
    Class(&'static str),
    /// `#id`
    Id(&'static str),
    /// `[attr]`
    Attr(&'static str),
    /// `tag[attr]`
    TagWithAttr { tag: &'static str, attr: &'static str },
    /// `input[type="…"][attr]`
    InputTypeWithAttr { input_type: &'static str, attr: &'static str },
    /// `[name="…"]`
    Name(&'static str),
}

impl Selector {
    /// CSS form for `querySelectorAll`.
    #[must_use]
    pub fn to_css(self) -> String {
        match self {
            Self::Class(class) => format!(".{class}"),
            Self::Id(id) => format!("#{id}"),
            Self::Attr(attr) => format!("[{attr}]"),
            Self::TagWithAttr { tag, attr } => format!("{tag}[{attr}]"),
            Self::InputTypeWithAttr { input_type, attr } => format!("input[type=\"{input_type}\"][{attr}]"),
            Self::Name(name) => format!("[name=\"{name}\"]"),
        }
    }

    /// Match an element described by its tag name and attribute lookup.
    ///
    /// `id` and `class` are read through `attribute` like any other attribute.
    pub fn matches<'a>(self, tag: &str, attribute: impl Fn(&str) -> Option<&'a str>) -> bool {
        match self {
            Self::Class(class) => {
                attribute("class").is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
            }
            Self::Id(id) => attribute("id") == Some(id),
            Self::Attr(attr) => attribute(attr).is_some(),
            Self::TagWithAttr { tag: wanted, attr } => tag.eq_ignore_ascii_case(wanted) && attribute(attr).is_some(),
            Self::InputTypeWithAttr { input_type, attr } => {
                tag.eq_ignore_ascii_case("input")
                    && attribute("type").is_some_and(|t| t.eq_ignore_ascii_case(input_type))
                    && attribute(attr).is_some()
            }
            Self::Name(name) => attribute("name") == Some(name),
        }
    }
}
