//! Channel table configuration types

/// One output channel: the classification value it collects and its name.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSpec {
    pub value: i64,
    pub name: String,
}

impl ChannelSpec {
    pub fn new(value: i64, name: &str) -> Self {
        Self {
            value,
            name: name.to_string(),
        }
    }
}

/// Ordered mapping from classification value to output channel.
///
/// Table order fixes both the page order of the mask container and the
/// order of names in the metadata record. The table is explicit
/// configuration passed into the pipeline, never derived from data; a
/// classification value outside the table contributes to no channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelTable {
    channels: Vec<ChannelSpec>,
}

impl ChannelTable {
    pub fn new(channels: Vec<ChannelSpec>) -> Self {
        Self { channels }
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Index of the channel collecting the given classification value.
    pub fn index_of(&self, value: i64) -> Option<usize> {
        self.channels.iter().position(|c| c.value == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChannelSpec> {
        self.channels.iter()
    }
}

impl Default for ChannelTable {
    /// The fallopian-tube tissue classes used by the annotation protocol.
    fn default() -> Self {
        Self::new(vec![
            ChannelSpec::new(1, "antimesosalpinx epithelium"),
            ChannelSpec::new(2, "antimesosalpinx muscularus"),
            ChannelSpec::new(3, "mesosalpinx epithelium"),
            ChannelSpec::new(4, "mesosalpinx muscularus"),
        ])
    }
}
