// Decorator: a Christmas tree whose description grows with every decoration.
//
// Instead of nesting wrappers inside wrappers, the tree keeps the ordered
// list of decorations and applies them left to right when described.

use std::fmt;

use tracing::debug;

use crate::console::Console;

pub const BASE_TREE: &str = "Christmas Tree";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    Ornaments,
    Garlands,
    Lights,
    Glow,
}

impl Decoration {
    pub const ALL: [Decoration; 4] = [
        Decoration::Ornaments,
        Decoration::Garlands,
        Decoration::Lights,
        Decoration::Glow,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            Decoration::Ornaments => " with Ornaments",
            Decoration::Garlands => " with Garlands",
            Decoration::Lights => " with Lights",
            Decoration::Glow => " that Glows!",
        }
    }

    fn apply(self, description: &mut String) {
        description.push_str(self.suffix());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    base: String,
    decorations: Vec<Decoration>,
}

impl Tree {
    pub fn christmas() -> Self {
        Self::with_base(BASE_TREE)
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            decorations: Vec::new(),
        }
    }

    /// Returns a new tree with `decoration` added after every existing one.
    pub fn wrap(mut self, decoration: Decoration) -> Self {
        debug!(?decoration, depth = self.decorations.len() + 1, "decorating tree");
        self.decorations.push(decoration);
        self
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    pub fn decorate(&self) -> String {
        let mut description = self.base.clone();
        for decoration in &self.decorations {
            decoration.apply(&mut description);
        }
        description
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.decorate())
    }
}

pub fn run(console: &dyn Console) {
    let tree = Tree::christmas();
    console.line(&format!("Basic Tree: {tree}"));

    let tree = tree.wrap(Decoration::Ornaments);
    console.line(&format!("With Ornaments: {tree}"));

    let tree = tree.wrap(Decoration::Garlands);
    console.line(&format!("With Garlands: {tree}"));

    let tree = tree.wrap(Decoration::Lights);
    console.line(&format!("With Lights: {tree}"));

    let tree = tree.wrap(Decoration::Glow);
    console.line(&format!("Final Tree: {tree}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::RecordingConsole;
    use proptest::prelude::*;

    #[test]
    fn test_plain_tree() {
        assert_eq!(Tree::christmas().decorate(), "Christmas Tree");
    }

    #[test]
    fn test_wrap_order_is_kept() {
        let tree = Tree::christmas()
            .wrap(Decoration::Ornaments)
            .wrap(Decoration::Garlands);
        assert_eq!(tree.decorate(), "Christmas Tree with Ornaments with Garlands");

        let swapped = Tree::christmas()
            .wrap(Decoration::Garlands)
            .wrap(Decoration::Ornaments);
        assert_eq!(swapped.decorate(), "Christmas Tree with Garlands with Ornaments");
        assert_ne!(tree.decorate(), swapped.decorate());
    }

    #[test]
    fn test_same_decoration_twice() {
        let tree = Tree::christmas().wrap(Decoration::Lights).wrap(Decoration::Lights);
        assert_eq!(tree.decorate(), "Christmas Tree with Lights with Lights");
    }

    #[test]
    fn test_driver_transcript() {
        let console = RecordingConsole::new();
        run(&console);

        assert_eq!(
            console.lines(),
            vec![
                "Basic Tree: Christmas Tree",
                "With Ornaments: Christmas Tree with Ornaments",
                "With Garlands: Christmas Tree with Ornaments with Garlands",
                "With Lights: Christmas Tree with Ornaments with Garlands with Lights",
                "Final Tree: Christmas Tree with Ornaments with Garlands with Lights that Glows!",
            ]
        );
    }

    fn decoration() -> impl Strategy<Value = Decoration> {
        prop::sample::select(Decoration::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn test_depth_n_appends_n_suffixes(chain in prop::collection::vec(decoration(), 0..12)) {
            let tree = chain
                .iter()
                .fold(Tree::christmas(), |tree, decoration| tree.wrap(*decoration));

            let expected: String = std::iter::once(BASE_TREE)
                .chain(chain.iter().map(|d| d.suffix()))
                .collect();

            prop_assert_eq!(tree.decorations().len(), chain.len());
            prop_assert_eq!(tree.decorate(), expected);
        }

        #[test]
        fn test_wrapping_is_associative(
            first in prop::collection::vec(decoration(), 0..6),
            second in prop::collection::vec(decoration(), 0..6),
        ) {
            // Decorating with `first` then `second` equals decorating with the
            // concatenation in one pass.
            let stepwise = second
                .iter()
                .fold(
                    first.iter().fold(Tree::christmas(), |t, d| t.wrap(*d)),
                    |t, d| t.wrap(*d),
                );
            let joined = first
                .iter()
                .chain(second.iter())
                .fold(Tree::christmas(), |t, d| t.wrap(*d));

            prop_assert_eq!(stepwise.decorate(), joined.decorate());
        }
    }
}
