use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::borrow::Cow;
use tracing::{trace, warn};

/// An element collected from a markup document; element names are kept
/// without their namespace prefix (`ns1:infoTable` is stored as `infoTable`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Node>,
}

impl Node {
    /// First child element named `name`.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Text content of a leaf element; elements holding other elements have
    /// no text of their own.
    pub fn text(&self) -> &str {
        match self.children.is_empty() {
            true => &self.text,
            false => "",
        }
    }
}

/// Follow `path` down from `node`, returning the text of the element reached.
///
/// Any missing step, including a missing `node`, gives an empty string:
/// ```rust
/// use thirteenf_spider::markup::{elements, extract};
///
/// let tables = elements(
///     "<infoTable><shrsOrPrnAmt><sshPrnamt>500</sshPrnamt></shrsOrPrnAmt></infoTable>",
///     "infoTable",
/// );
/// assert_eq!(extract(tables.first(), &["shrsOrPrnAmt", "sshPrnamt"]), "500");
/// assert_eq!(extract(tables.first(), &["otherManager"]), "");
/// assert_eq!(extract(None, &["cusip"]), "");
/// ```
pub fn extract(node: Option<&Node>, path: &[&str]) -> String {
    descend(node, path)
        .map(|node| node.text().to_string())
        .unwrap_or_default()
}

/// Like [`extract`], but returns attribute `key` of the element reached.
pub fn attribute(node: Option<&Node>, path: &[&str], key: &str) -> String {
    descend(node, path)
        .and_then(|node| node.attribute(key))
        .map(str::to_string)
        .unwrap_or_default()
}

fn descend<'a>(node: Option<&'a Node>, path: &[&str]) -> Option<&'a Node> {
    path.iter().try_fold(node?, |node, name| node.child(name))
}

/// Every element named `name` within `text`, in document order.
///
/// The scan is lenient: closing tags need not match, unclosed elements are
/// closed at the end of the input, and a markup error ends the scan, keeping
/// whatever was collected before it. Matching elements nested inside another
/// match are returned as children of the outer one only.
pub fn elements(text: &str, name: &str) -> Vec<Node> {
    let mut reader = Reader::from_str(text);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut found: Vec<Node> = vec![];
    let mut stack: Vec<Node> = vec![];

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if !stack.is_empty() || local_name(&e) == name {
                    stack.push(open(&e));
                }
            }
            Ok(Event::Empty(e)) => {
                if !stack.is_empty() || local_name(&e) == name {
                    close(open(&e), &mut stack, &mut found);
                }
            }
            Ok(Event::End(e)) => {
                let end = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();

                // close everything opened since the matching start tag
                if let Some(pos) = stack.iter().rposition(|node| node.name == end) {
                    while stack.len() > pos {
                        if let Some(node) = stack.pop() {
                            close(node, &mut stack, &mut found);
                        }
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(node) = stack.last_mut() {
                    let text = e
                        .unescape()
                        .unwrap_or_else(|_| String::from_utf8_lossy(&e).into_owned().into());
                    node.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                warn!(
                    "markup error at position {}, error({err}); keeping {} <{name}> elements",
                    reader.error_position(),
                    found.len()
                );
                break;
            }
            _ => (),
        }
    }

    // unterminated elements
    while let Some(node) = stack.pop() {
        close(node, &mut stack, &mut found);
    }

    trace!("found {} <{name}> elements", found.len());
    found
}

fn local_name<'a>(e: &'a BytesStart<'a>) -> Cow<'a, str> {
    String::from_utf8_lossy(e.local_name().into_inner())
}

fn open(e: &BytesStart) -> Node {
    let attributes = e
        .html_attributes()
        .filter_map(Result::ok)
        .map(|attr| {
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = match attr.unescape_value() {
                Ok(value) => value.into_owned(),
                Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
            };
            (key, value)
        })
        .collect();

    Node {
        name: local_name(e).into_owned(),
        attributes,
        ..Default::default()
    }
}

fn close(node: Node, stack: &mut Vec<Node>, found: &mut Vec<Node>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => found.push(node),
    }
}

//////////////////////////////////////////////////////////////
// -- TESTS --
//////////////////////////////////////////////////////////////
