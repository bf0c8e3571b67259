//! Shared presentational primitive library for the component gallery.
//!
//! The crate owns the stateless Leptos primitives, a centralized icon API, and
//! the stable `data-kit-*` DOM contract consumed by the gallery CSS layers.
//! Pages and stateful presenters compose these primitives instead of emitting
//! ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Accordion, Aside, Badge, Breadcrumbs, Button, ButtonShape, ButtonSize, ButtonVariant, Card,
    Col, Crumb, Grid, Heading, IconButton, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding,
    Main, Modal, Pagination, Row, Section, Switch, Tab, TabList, Text, TextRole, TextTone,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Accordion, Aside, Badge, Breadcrumbs, Button, ButtonShape, ButtonSize, ButtonVariant,
        Card, Col, Crumb, Grid, Heading, Icon, IconButton, IconName, IconSize, LayoutAlign,
        LayoutGap, LayoutJustify, LayoutPadding, Main, Modal, Pagination, Row, Section, Switch,
        Tab, TabList, Text, TextRole, TextTone,
    };
}
