//! Candidate collector — records declaration sites during the syntax pass.
//!
//! No filtering, no dedup, no attribute interpretation. The generation stage
//! decides which candidates are view models.

/// A class declaration the syntax pass visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationSite {
    pub name: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
    /// Raw attribute list text, uninterpreted.
    pub attributes: Vec<String>,
    pub is_partial: bool,
}

/// A syntax node as delivered by the host's syntax walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    ClassDeclaration(DeclarationSite),
    Other { kind: String },
}

/// Receives every syntax node the host visits.
pub trait SyntaxReceiver {
    fn on_visit_syntax_node(&mut self, node: &SyntaxNode);
}

/// Append-only sequence of class declaration sites, in visit order.
#[derive(Debug, Clone, Default)]
pub struct CandidateCollector {
    candidates: Vec<DeclarationSite>,
}

impl CandidateCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a whole walk through the receiver.
    pub fn visit_all<'a, I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = &'a SyntaxNode>,
    {
        for node in nodes {
            self.on_visit_syntax_node(node);
        }
    }

    pub fn candidates(&self) -> &[DeclarationSite] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn into_candidates(self) -> Vec<DeclarationSite> {
        self.candidates
    }
}

impl SyntaxReceiver for CandidateCollector {
    fn on_visit_syntax_node(&mut self, node: &SyntaxNode) {
        if let SyntaxNode::ClassDeclaration(site) = node {
            self.candidates.push(site.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str, line: u32) -> SyntaxNode {
        SyntaxNode::ClassDeclaration(DeclarationSite {
            name: name.to_string(),
            file: "ViewModels.cs".to_string(),
            line,
            column: 4,
            attributes: vec![],
            is_partial: true,
        })
    }

    #[test]
    fn records_class_declarations_in_visit_order() {
        let nodes = vec![
            class("B", 10),
            SyntaxNode::Other {
                kind: "MethodDeclaration".to_string(),
            },
            class("A", 20),
        ];
        let mut collector = CandidateCollector::new();
        collector.visit_all(&nodes);
        let names: Vec<_> = collector.candidates().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn keeps_duplicates_and_unattributed_sites() {
        let node = class("Same", 1);
        let mut collector = CandidateCollector::new();
        collector.on_visit_syntax_node(&node);
        collector.on_visit_syntax_node(&node);
        assert_eq!(collector.len(), 2);
        assert!(collector.candidates().iter().all(|c| c.attributes.is_empty()));
    }
}
