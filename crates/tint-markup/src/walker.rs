//! Depth-first style accumulation over a markup tree.
//!
//! Each frame carries the style and descriptor inherited by its children.
//! The walk uses an explicit stack, so nesting depth is bounded by heap
//! memory rather than the call stack.

use std::slice;

use crate::catalog::Tag;
use crate::coalesce::Coalescer;
use crate::descriptor::Descriptor;
use crate::run::{Coalesce, TextRun, VerboseTextRun};
use crate::style::{StyleAttributes, StylePatch};
use crate::tree::{Element, Node};

/// Run type the walker can emit.
pub(crate) trait Emit: Coalesce {
    /// Whether unrecognized markup is recorded in descriptors.
    const TRACK_ISSUES: bool;

    fn emit(text: &str, style: &StyleAttributes, descriptor: &Descriptor) -> Self;
}

impl Emit for TextRun {
    const TRACK_ISSUES: bool = false;

    fn emit(text: &str, style: &StyleAttributes, _descriptor: &Descriptor) -> Self {
        TextRun::new(text, style.clone())
    }
}

impl Emit for VerboseTextRun {
    const TRACK_ISSUES: bool = true;

    fn emit(text: &str, style: &StyleAttributes, descriptor: &Descriptor) -> Self {
        VerboseTextRun::new(TextRun::new(text, style.clone()), descriptor.clone())
    }
}

struct Frame<'a> {
    children: slice::Iter<'a, Node>,
    style: StyleAttributes,
    descriptor: Descriptor,
}

/// Walk `root` and its descendants in document order, returning coalesced runs.
pub(crate) fn walk<R: Emit>(root: &Element) -> Vec<R> {
    let mut coalescer = Coalescer::new();
    let (style, descriptor) = resolve::<R>(root, &StyleAttributes::default(), &Descriptor::new());
    let mut stack = vec![Frame {
        children: root.children.iter(),
        style,
        descriptor,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(node) = frame.children.next() else {
            stack.pop();
            continue;
        };
        match node {
            Node::Text(text) => {
                if !text.is_empty() {
                    coalescer.push(R::emit(text, &frame.style, &frame.descriptor));
                }
            }
            Node::Element(element) => {
                let (style, descriptor) = resolve::<R>(element, &frame.style, &frame.descriptor);
                stack.push(Frame {
                    children: element.children.iter(),
                    style,
                    descriptor,
                });
            }
            Node::Comment(_) => {}
        }
    }

    coalescer.finish()
}

/// Style and descriptor in effect inside `element`.
fn resolve<R: Emit>(
    element: &Element,
    style: &StyleAttributes,
    descriptor: &Descriptor,
) -> (StyleAttributes, Descriptor) {
    let tag = Tag::lookup(&element.name);
    if tag.is_none() {
        tracing::debug!(tag = %element.name, "Unrecognized tag");
    }

    let mut patch = tag.map_or_else(StylePatch::new, Tag::implicit_patch);
    let mut unrecognized = Vec::new();
    for attribute in &element.attributes {
        match tag.and_then(|tag| tag.attribute(&attribute.name)) {
            Some(setter) => patch = setter.apply(patch, &attribute.value),
            None => {
                tracing::debug!(
                    tag = %element.name,
                    attribute = %attribute.name,
                    "Unrecognized attribute"
                );
                if R::TRACK_ISSUES {
                    unrecognized.push(attribute.name.clone());
                }
            }
        }
    }

    let descriptor = if R::TRACK_ISSUES {
        descriptor.descend(tag.is_none().then_some(element.name.as_str()), unrecognized)
    } else {
        Descriptor::new()
    };
    (style.derive(&patch), descriptor)
}
