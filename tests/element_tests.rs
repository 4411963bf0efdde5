#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

#[cfg(test)]
mod element_tests {
    use lwdom::{new_element, Element, ErrorKind, IdentifierUsage, Node, Text};

    fn names(nodes: &[Element]) -> Vec<String> {
        nodes.iter().map(|e| e.name().to_string()).collect()
    }

    fn abc() -> (Element, Node, Node, Node) {
        let parent = new_element("parent").unwrap();
        let a = Node::from(new_element("a").unwrap());
        let b = Node::from(Text::new("b"));
        let c = Node::from(new_element("c").unwrap());
        parent
            .append_child(a.clone())
            .append_child(b.clone())
            .append_child(c.clone());
        (parent, a, b, c)
    }

    // Child ordering
    #[test]
    fn test_append_preserves_order() {
        let (parent, a, b, c) = abc();
        assert_eq!(parent.children(), vec![a, b, c]);
        assert_eq!(parent.child_count(), 3);
    }

    #[test]
    fn test_insert_in_middle() -> Result<(), Box<dyn std::error::Error>> {
        let (parent, a, b, c) = abc();
        let x = Node::from(new_element("x")?);
        parent.insert_child(1, x.clone())?;
        assert_eq!(parent.children(), vec![a, x, b, c]);
        Ok(())
    }

    #[test]
    fn test_insert_past_end_fails() {
        let (parent, ..) = abc();
        let err = parent.insert_child(4, Text::new("late")).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::IndexOutOfRange { index: 4, len: 3 });
        assert_eq!(parent.child_count(), 3);
    }

    #[test]
    fn test_remove_child_by_identity() {
        let (parent, a, b, c) = abc();
        parent.remove_child(&b);
        assert_eq!(parent.children(), vec![a.clone(), c.clone()]);

        // same content, different node
        parent.remove_child(&Node::from(Text::new("b")));
        parent.remove_child(&Node::from(new_element("a").unwrap()));
        assert_eq!(parent.children(), vec![a, c]);
    }

    #[test]
    fn test_remove_child_only_first_occurrence() {
        let parent = new_element("p").unwrap();
        let shared = Node::from(new_element("s").unwrap());
        parent
            .append_child(shared.clone())
            .append_text("middle")
            .append_child(shared.clone());
        parent.remove_child(&shared);
        assert_eq!(parent.child_count(), 2);
        assert_eq!(parent.index_of_child(&shared), Some(1));
    }

    #[test]
    fn test_remove_first_and_last() -> Result<(), Box<dyn std::error::Error>> {
        let (parent, _a, b, _c) = abc();
        parent.remove_first_child()?.remove_last_child()?;
        assert_eq!(parent.children(), vec![b]);
        parent.remove_last_child()?;
        assert!(parent.remove_first_child().is_err());
        assert_eq!(
            parent.remove_last_child().unwrap_err().kind(),
            &ErrorKind::EmptyChildren
        );
        Ok(())
    }

    #[test]
    fn test_replace_child() {
        let (parent, a, b, c) = abc();
        let y = Node::from(Text::new("y"));
        parent.replace_child(&b, y.clone());
        assert_eq!(parent.children(), vec![a.clone(), y.clone(), c.clone()]);

        // not a child: no-op
        parent.replace_child(&b, Text::new("z"));
        assert_eq!(parent.children(), vec![a, y, c]);
    }

    #[test]
    fn test_positional_queries() {
        let (parent, a, b, c) = abc();
        assert_eq!(parent.child(1), Some(b.clone()));
        assert_eq!(parent.child(3), None);
        assert_eq!(parent.first_child(), Some(a.clone()));
        assert_eq!(parent.last_child(), Some(c.clone()));
        assert_eq!(parent.index_of_child(&c), Some(2));
        assert_eq!(parent.index_of_child(&Node::from(Text::new("b"))), None);

        let empty = new_element("empty").unwrap();
        assert_eq!(empty.first_child(), None);
        assert_eq!(empty.last_child(), None);
        assert_eq!(empty.child(0), None);
    }

    // Filtered views
    #[test]
    fn test_elements_and_texts_partition_children() {
        let parent = new_element("mixed").unwrap();
        parent
            .append_text("one")
            .append_child(new_element("two").unwrap())
            .append_text("three")
            .append_child(new_element("four").unwrap());

        let elements = parent.elements();
        let texts = parent.texts();
        assert_eq!(names(&elements), ["two", "four"]);
        let contents: Vec<_> = texts.iter().map(Text::content).collect();
        assert_eq!(contents, ["one", "three"]);

        let children = parent.children();
        assert_eq!(elements.len() + texts.len(), children.len());
        let (mut e, mut t) = (elements.iter(), texts.iter());
        for child in &children {
            match child {
                Node::Element(el) => assert_eq!(Some(el), e.next()),
                Node::Text(tx) => assert_eq!(Some(tx), t.next()),
            }
        }
    }

    #[test]
    fn test_snapshots_are_not_live() {
        let (parent, ..) = abc();
        let before = parent.children();
        parent.append_text("more");
        assert_eq!(before.len(), 3);
        assert_eq!(parent.child_count(), 4);
    }

    // Recursive search
    #[test]
    fn test_search_is_preorder() {
        let root = new_element("root").unwrap();
        let outer = new_element("item").unwrap();
        let inner = new_element("item").unwrap();
        let deep = new_element("item").unwrap();
        let sibling = new_element("item").unwrap();
        let other = new_element("other").unwrap();

        inner.append_child(&deep);
        other.append_child(&inner);
        outer.append_child(&other);
        root.append_child(&outer).append_text("noise").append_child(&sibling);

        let found = root.search_elements_by_name("item");
        assert_eq!(found, vec![outer, inner, deep, sibling]);
        assert!(root.search_elements_by_name("root").is_empty());
        assert!(root.search_elements_by_name("missing").is_empty());
    }

    #[test]
    fn test_shared_child_found_under_each_parent() {
        let root = new_element("root").unwrap();
        let shared = new_element("leaf").unwrap();
        root.append_child(new_element("a").unwrap().append_child(&shared))
            .append_child(new_element("b").unwrap().append_child(&shared));
        let found = root.search_elements_by_name("leaf");
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|e| e.ptr_eq(&shared)));
    }

    // Attributes
    #[test]
    fn test_attribute_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
        let e = new_element("e")?;
        e.set_attribute("id", "1")?.set_attribute("id", "2")?;
        assert!(e.has_attribute("id"));
        assert_eq!(e.attribute("id").as_deref(), Some("2"));
        assert_eq!(e.attributes().len(), 1);

        e.remove_attribute("id").remove_attribute("id");
        assert!(!e.has_attribute("id"));
        assert!(e.attributes().is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_attribute_key_is_atomic() {
        let e = new_element("e").unwrap();
        e.set_attribute("keep", "me").unwrap();
        let before = e.attributes();

        for key in ["", "1x", "a b", "x=y"] {
            let err = e.set_attribute(key, "v").unwrap_err();
            assert_eq!(
                err.kind(),
                &ErrorKind::InvalidIdentifier {
                    name: key.to_string(),
                    usage: IdentifierUsage::AttributeName,
                }
            );
        }
        assert_eq!(e.attributes(), before);
    }

    #[test]
    fn test_invalid_element_names() {
        for name in ["", "1abc", "a b", "-x", "<x>"] {
            assert!(new_element(name).is_err(), "{name:?} should be rejected");
        }
        for name in ["_x", "a.b-c:d_e", "svg:rect", "Ünïcödé"] {
            assert!(new_element(name).is_ok(), "{name:?} should be accepted");
        }
    }

    #[test]
    fn test_attribute_values_are_unrestricted() -> Result<(), Box<dyn std::error::Error>> {
        let e = new_element("e")?;
        let value = "<&>\"' \n\t".repeat(1000);
        e.set_attribute("big", value.clone())?;
        assert_eq!(e.attribute("big"), Some(value));
        Ok(())
    }
}
