//! Declarative admin-site configuration
//!
//! The administrative UI is generated by a generic renderer from this
//! configuration: which columns each list shows, which fields are
//! filterable, searchable, or editable inline, how detail forms group
//! fields, and which bulk actions are offered. The configuration is
//! static data assembled once at startup and served as JSON; it carries
//! no business logic.

use once_cell::sync::Lazy;
use serde::Serialize;

/// Top-level admin site: branding plus one descriptor per managed model
#[derive(Debug, Clone, Serialize)]
pub struct AdminSite {
    pub site_header: &'static str,
    pub site_title: &'static str,
    pub index_title: &'static str,
    pub models: Vec<ModelAdmin>,
}

/// Admin descriptor for a single model
#[derive(Debug, Clone, Serialize)]
pub struct ModelAdmin {
    pub model: &'static str,
    pub verbose_name: &'static str,
    pub verbose_name_plural: &'static str,
    /// Columns shown in the list table, in order
    pub list_display: &'static [&'static str],
    /// Fields offered in the filter side panel
    pub list_filter: &'static [&'static str],
    /// Fields covered by free-text search
    pub search_fields: &'static [&'static str],
    /// Boolean flags editable inline from the list, without a full form
    pub list_editable: &'static [&'static str],
    /// Default ordering column
    pub ordering: &'static str,
    /// Read-only fields on the detail form
    pub readonly_fields: &'static [&'static str],
    pub fields: &'static [FieldMeta],
    pub fieldsets: &'static [Fieldset],
    pub actions: &'static [ActionMeta],
}

/// Documentation-only metadata for a field
#[derive(Debug, Clone, Serialize)]
pub struct FieldMeta {
    pub name: &'static str,
    pub help_text: &'static str,
}

/// A titled group of fields on the detail/edit form
#[derive(Debug, Clone, Serialize)]
pub struct Fieldset {
    pub title: &'static str,
    pub fields: &'static [&'static str],
    /// Rendered collapsed by default
    pub collapsed: bool,
}

/// A bulk action offered on the list view
#[derive(Debug, Clone, Serialize)]
pub struct ActionMeta {
    /// Wire name accepted by the bulk endpoint
    pub name: &'static str,
    /// Human-readable label shown in the action dropdown
    pub label: &'static str,
}

const CATEGORY_FIELDS: &[FieldMeta] = &[
    FieldMeta {
        name: "name",
        help_text: "Name of the food category (e.g., Fruits, Vegetables, Grains)",
    },
    FieldMeta {
        name: "description",
        help_text: "Brief description of the food category",
    },
    FieldMeta {
        name: "is_active",
        help_text: "Whether this category is currently active",
    },
];

const CATEGORY_FIELDSETS: &[Fieldset] = &[
    Fieldset {
        title: "Basic Information",
        fields: &["name", "description"],
        collapsed: false,
    },
    Fieldset {
        title: "Status",
        fields: &["is_active"],
        collapsed: false,
    },
    Fieldset {
        title: "Statistics",
        fields: &["food_count"],
        collapsed: true,
    },
    Fieldset {
        title: "Timestamps",
        fields: &["created_at", "updated_at"],
        collapsed: true,
    },
];

const FOOD_FIELDS: &[FieldMeta] = &[
    FieldMeta {
        name: "name",
        help_text: "Name of the food item (e.g., Apple, Brown Rice)",
    },
    FieldMeta {
        name: "category",
        help_text: "Category this food belongs to",
    },
    FieldMeta {
        name: "description",
        help_text: "Additional description or notes about the food item",
    },
    FieldMeta {
        name: "is_active",
        help_text: "Whether this food item is currently active",
    },
    FieldMeta {
        name: "is_organic",
        help_text: "Whether this is an organic food item",
    },
];

const FOOD_FIELDSETS: &[Fieldset] = &[
    Fieldset {
        title: "Basic Information",
        fields: &["name", "category", "description"],
        collapsed: false,
    },
    Fieldset {
        title: "Status",
        fields: &["is_active", "is_organic"],
        collapsed: false,
    },
    Fieldset {
        title: "Timestamps",
        fields: &["created_at", "updated_at"],
        collapsed: true,
    },
];

const FOOD_ACTIONS: &[ActionMeta] = &[
    ActionMeta {
        name: "make_active",
        label: "Mark selected foods as active",
    },
    ActionMeta {
        name: "make_inactive",
        label: "Mark selected foods as inactive",
    },
    ActionMeta {
        name: "mark_as_organic",
        label: "Mark selected foods as organic",
    },
    ActionMeta {
        name: "mark_as_non_organic",
        label: "Mark selected foods as non-organic",
    },
];

static SITE: Lazy<AdminSite> = Lazy::new(|| AdminSite {
    site_header: "Nutrition App Administration",
    site_title: "Nutrition Admin",
    index_title: "Welcome to Nutrition Management",
    models: vec![
        ModelAdmin {
            model: "food_category",
            verbose_name: "Food Category",
            verbose_name_plural: "Food Categories",
            list_display: &["name", "is_active", "food_count", "created_at", "updated_at"],
            list_filter: &["is_active", "created_at"],
            search_fields: &["name", "description"],
            list_editable: &["is_active"],
            ordering: "name",
            readonly_fields: &["created_at", "updated_at", "food_count"],
            fields: CATEGORY_FIELDS,
            fieldsets: CATEGORY_FIELDSETS,
            actions: &[],
        },
        ModelAdmin {
            model: "food_item",
            verbose_name: "Food Item",
            verbose_name_plural: "Food Items",
            list_display: &["name", "category", "is_active", "is_organic", "created_at"],
            list_filter: &["category", "is_active", "is_organic", "created_at", "updated_at"],
            search_fields: &["name", "description", "category_name"],
            list_editable: &["is_active", "is_organic"],
            ordering: "name",
            readonly_fields: &["created_at", "updated_at"],
            fields: FOOD_FIELDS,
            fieldsets: FOOD_FIELDSETS,
            actions: FOOD_ACTIONS,
        },
    ],
});

/// The admin site configuration, assembled once
pub fn site() -> &'static AdminSite {
    &SITE
}
