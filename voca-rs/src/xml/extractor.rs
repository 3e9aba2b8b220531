//! Streaming extractor for vocabulary export files.
//!
//! Uses quick-xml's streaming API. The whole document is consumed in one
//! pass; no tree is built. Text is taken exactly as written — no case
//! folding, no whitespace trimming — so set membership is decided by the
//! literal text the export contains.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::escape::unescape;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Error, Result};

/// Names describing one export format: the element wrapping an entry and the
/// child element holding the term text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSchema {
    pub unit: String,
    pub property: String,
}

impl SourceSchema {
    /// Creates a schema from a unit tag and a property tag.
    pub fn new(unit: impl Into<String>, property: impl Into<String>) -> Self {
        SourceSchema {
            unit: unit.into(),
            property: property.into(),
        }
    }

    /// Schema of a Bing Dict export (`<WordUnit><HeadWord>term</HeadWord>…`).
    pub fn bing() -> Self {
        SourceSchema::new(crate::constants::BING_UNIT, crate::constants::BING_PROPERTY)
    }

    /// Schema of a Youdao Dict export (`<item><word>term</word>…`).
    pub fn youdao() -> Self {
        SourceSchema::new(
            crate::constants::YOUDAO_UNIT,
            crate::constants::YOUDAO_PROPERTY,
        )
    }
}

/// Extracts the vocabulary set described by a [`SourceSchema`].
pub struct VocabExtractor {
    schema: SourceSchema,
}

impl VocabExtractor {
    /// Creates a new extractor for the given schema.
    pub fn new(schema: SourceSchema) -> Self {
        VocabExtractor { schema }
    }

    /// Extracts the vocabulary set from an XML string.
    pub fn extract_str(&self, xml: &str) -> Result<BTreeSet<String>> {
        let mut reader = Reader::from_str(xml);
        // Exact text; quick-xml must not trim around it
        reader.config_mut().trim_text_start = false;
        reader.config_mut().trim_text_end = false;
        self.extract_reader(&mut reader)
    }

    /// Extracts the vocabulary set from an XML file.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<BTreeSet<String>> {
        let file = File::open(path)?;
        let buf_reader = BufReader::new(file);
        let mut reader = Reader::from_reader(buf_reader);
        reader.config_mut().trim_text_start = false;
        reader.config_mut().trim_text_end = false;
        self.extract_reader(&mut reader)
    }

    /// Streams events from a quick-xml Reader, collecting property text.
    ///
    /// `depth` counts currently open elements. A property only counts when it
    /// is a direct child of a unit element; the first such child wins, any
    /// later sibling with the same name is ignored. A unit that closes
    /// without a property child is a fatal lookup error.
    fn extract_reader<R: BufRead>(&self, reader: &mut Reader<R>) -> Result<BTreeSet<String>> {
        let mut words = BTreeSet::new();
        let mut depth: usize = 0;
        let mut unit_depth: Option<usize> = None;
        let mut property_depth: Option<usize> = None;
        let mut found = false;
        let mut capture: Option<String> = None;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    depth += 1;
                    let name = reader
                        .decoder()
                        .decode(e.name().as_ref())
                        .map_err(|e| Error::Parse(e.to_string()))?
                        .to_string();
                    match unit_depth {
                        None => {
                            if name == self.schema.unit {
                                unit_depth = Some(depth);
                                found = false;
                            }
                        }
                        Some(ud) => {
                            if property_depth.is_none()
                                && !found
                                && depth == ud + 1
                                && name == self.schema.property
                            {
                                property_depth = Some(depth);
                                capture = Some(String::new());
                            }
                        }
                    }
                }
                Event::Empty(ref e) => {
                    let name = reader
                        .decoder()
                        .decode(e.name().as_ref())
                        .map_err(|e| Error::Parse(e.to_string()))?
                        .to_string();
                    // Self-closing tag; transient depth, never pushed
                    let elem_depth = depth + 1;
                    match unit_depth {
                        None => {
                            if name == self.schema.unit {
                                // An empty unit cannot carry the property
                                return Err(Error::MissingProperty {
                                    unit: self.schema.unit.clone(),
                                    property: self.schema.property.clone(),
                                });
                            }
                        }
                        Some(ud) => {
                            if property_depth.is_none()
                                && !found
                                && elem_depth == ud + 1
                                && name == self.schema.property
                            {
                                // Self-closed property carries no text
                                words.insert(String::new());
                                found = true;
                            }
                        }
                    }
                }
                Event::Text(ref e) => {
                    if let Some(text) = capture.as_mut() {
                        let raw = std::str::from_utf8(e.as_ref())
                            .map_err(|e| Error::Parse(e.to_string()))?;
                        let unescaped =
                            unescape(raw).map_err(|e| Error::Parse(e.to_string()))?;
                        text.push_str(&unescaped);
                    }
                }
                Event::CData(ref e) => {
                    // Treat CDATA like text
                    if let Some(text) = capture.as_mut() {
                        text.push_str(&String::from_utf8_lossy(e.as_ref()));
                    }
                }
                Event::End(_) => {
                    if property_depth == Some(depth) {
                        property_depth = None;
                        words.insert(capture.take().unwrap_or_default());
                        found = true;
                    } else if unit_depth == Some(depth) {
                        unit_depth = None;
                        if !found {
                            return Err(Error::MissingProperty {
                                unit: self.schema.unit.clone(),
                                property: self.schema.property.clone(),
                            });
                        }
                    }
                    depth -= 1;
                }
                Event::Eof => break,
                Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {
                    // Ignore XML declaration, processing instructions, DOCTYPE
                }
                Event::Comment(_) | Event::GeneralRef(_) => {
                    // Comments and general entity references carry no vocabulary
                }
            }
            buf.clear();
        }

        Ok(words)
    }
}

/// Extracts the vocabulary set from a file using the given schema.
pub fn extract_file<P: AsRef<Path>>(path: P, schema: SourceSchema) -> Result<BTreeSet<String>> {
    VocabExtractor::new(schema).extract_file(path)
}

/// Extracts the vocabulary set from an XML string using the given schema.
pub fn extract_str(xml: &str, schema: SourceSchema) -> Result<BTreeSet<String>> {
    VocabExtractor::new(schema).extract_str(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bing(xml: &str) -> Result<BTreeSet<String>> {
        extract_str(xml, SourceSchema::bing())
    }

    #[test]
    fn test_extract_basic() {
        let xml = r#"<Vocabulary>
            <WordUnit><HeadWord>apple</HeadWord><Date>2024-01-01</Date></WordUnit>
            <WordUnit><HeadWord>banana</HeadWord></WordUnit>
        </Vocabulary>"#;
        let words = bing(xml).unwrap();
        assert_eq!(
            words.iter().cloned().collect::<Vec<_>>(),
            vec!["apple".to_string(), "banana".to_string()]
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let xml = r#"<v>
            <WordUnit><HeadWord>apple</HeadWord></WordUnit>
            <WordUnit><HeadWord>apple</HeadWord></WordUnit>
        </v>"#;
        let words = bing(xml).unwrap();
        assert_eq!(words.len(), 1);
        assert!(words.contains("apple"));
    }

    #[test]
    fn test_youdao_schema() {
        let xml = r#"<wordbook>
            <item><word>cherry</word><trans>a fruit</trans></item>
        </wordbook>"#;
        let words = extract_str(xml, SourceSchema::youdao()).unwrap();
        assert!(words.contains("cherry"));
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn test_text_kept_exact() {
        // No trimming, no case folding
        let xml = "<v><WordUnit><HeadWord> Apple </HeadWord></WordUnit></v>";
        let words = bing(xml).unwrap();
        assert!(words.contains(" Apple "));
        assert!(!words.contains("apple"));
    }

    #[test]
    fn test_entities_unescaped() {
        let xml = "<v><WordUnit><HeadWord>rock &amp; roll</HeadWord></WordUnit></v>";
        let words = bing(xml).unwrap();
        assert!(words.contains("rock & roll"));
    }

    #[test]
    fn test_property_outside_unit_ignored() {
        let xml = r#"<v>
            <HeadWord>stray</HeadWord>
            <WordUnit><HeadWord>kept</HeadWord></WordUnit>
        </v>"#;
        let words = bing(xml).unwrap();
        assert_eq!(words.iter().cloned().collect::<Vec<_>>(), vec!["kept"]);
    }

    #[test]
    fn test_first_property_child_wins() {
        let xml = r#"<v><WordUnit>
            <HeadWord>first</HeadWord>
            <HeadWord>second</HeadWord>
        </WordUnit></v>"#;
        let words = bing(xml).unwrap();
        assert_eq!(words.iter().cloned().collect::<Vec<_>>(), vec!["first"]);
    }

    #[test]
    fn test_deep_property_not_a_child() {
        // Property nested below an intermediate element does not count
        let xml = r#"<v><WordUnit><Meta><HeadWord>deep</HeadWord></Meta></WordUnit></v>"#;
        let err = bing(xml).unwrap_err();
        assert!(matches!(err, Error::MissingProperty { .. }));
    }

    #[test]
    fn test_missing_property_is_fatal() {
        let xml = r#"<v><WordUnit><Date>2024</Date></WordUnit></v>"#;
        let err = bing(xml).unwrap_err();
        assert!(matches!(err, Error::MissingProperty { .. }));
    }

    #[test]
    fn test_empty_unit_is_fatal() {
        let xml = r#"<v><WordUnit /></v>"#;
        assert!(bing(xml).is_err());
    }

    #[test]
    fn test_self_closed_property_yields_empty_word() {
        let xml = r#"<v><WordUnit><HeadWord /></WordUnit></v>"#;
        let words = bing(xml).unwrap();
        assert!(words.contains(""));
    }

    #[test]
    fn test_malformed_xml_is_fatal() {
        let xml = "<v><WordUnit><HeadWord>oops</v>";
        assert!(bing(xml).is_err());
    }

    #[test]
    fn test_missing_file() {
        let res = extract_file("no/such/file.xml", SourceSchema::bing());
        assert!(matches!(res, Err(Error::Io(_))));
    }

    #[test]
    fn test_empty_document_yields_empty_set() {
        let words = bing("<v></v>").unwrap();
        assert!(words.is_empty());
    }
}
