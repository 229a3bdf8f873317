use serde::{Deserialize, Serialize};
use std::fmt;

use crate::file::FileUpload;
use crate::filter::FilterQuery;
use crate::form::FormDraft;

/// Form field carrying the intended verb of an overridden request.
pub const METHOD_OVERRIDE_FIELD: &str = "_method";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named routes of the panel backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRoute {
    Organizations,
    Contacts,
    ContactsStore,
    ContactsEdit(i64),
    ContactsUpdate(i64),
    ContactsDestroy(i64),
    ContactsRestore(i64),
    Users,
    UsersStore,
    UsersEdit(i64),
    UsersUpdate(i64),
    UsersDestroy(i64),
    UsersRestore(i64),
}

impl PanelRoute {
    pub fn name(&self) -> &'static str {
        match self {
            PanelRoute::Organizations => "organizations",
            PanelRoute::Contacts => "contacts",
            PanelRoute::ContactsStore => "contacts.store",
            PanelRoute::ContactsEdit(_) => "contacts.edit",
            PanelRoute::ContactsUpdate(_) => "contacts.update",
            PanelRoute::ContactsDestroy(_) => "contacts.destroy",
            PanelRoute::ContactsRestore(_) => "contacts.restore",
            PanelRoute::Users => "users",
            PanelRoute::UsersStore => "users.store",
            PanelRoute::UsersEdit(_) => "users.edit",
            PanelRoute::UsersUpdate(_) => "users.update",
            PanelRoute::UsersDestroy(_) => "users.destroy",
            PanelRoute::UsersRestore(_) => "users.restore",
        }
    }

    pub fn path(&self) -> String {
        match self {
            PanelRoute::Organizations => "/organizations".to_string(),
            PanelRoute::Contacts | PanelRoute::ContactsStore => "/contacts".to_string(),
            PanelRoute::ContactsEdit(id) | PanelRoute::ContactsUpdate(id) => {
                format!("/contacts/{id}")
            }
            PanelRoute::ContactsDestroy(id) => format!("/contacts/{id}/destroy"),
            PanelRoute::ContactsRestore(id) => format!("/contacts/{id}/restore"),
            PanelRoute::Users | PanelRoute::UsersStore => "/users".to_string(),
            PanelRoute::UsersEdit(id) | PanelRoute::UsersUpdate(id) => format!("/users/{id}"),
            PanelRoute::UsersDestroy(id) => format!("/users/{id}/destroy"),
            PanelRoute::UsersRestore(id) => format!("/users/{id}/restore"),
        }
    }

    /// Verb the backend expects semantically.
    pub fn intended_method(&self) -> HttpMethod {
        match self {
            PanelRoute::Organizations
            | PanelRoute::Contacts
            | PanelRoute::ContactsEdit(_)
            | PanelRoute::Users
            | PanelRoute::UsersEdit(_) => HttpMethod::Get,
            PanelRoute::ContactsStore | PanelRoute::UsersStore => HttpMethod::Post,
            PanelRoute::ContactsUpdate(_)
            | PanelRoute::UsersUpdate(_)
            | PanelRoute::ContactsRestore(_)
            | PanelRoute::UsersRestore(_) => HttpMethod::Put,
            PanelRoute::ContactsDestroy(_) | PanelRoute::UsersDestroy(_) => HttpMethod::Delete,
        }
    }

    /// Updates carry form bodies (possibly multipart with a file), which the
    /// backend only parses on POST. They travel as POST with the real verb
    /// in [`METHOD_OVERRIDE_FIELD`].
    pub fn overrides_method(&self) -> bool {
        matches!(self, PanelRoute::ContactsUpdate(_) | PanelRoute::UsersUpdate(_))
    }
}

/// One request to the panel backend, ready to be sent by the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    pub route_name: &'static str,
    /// Verb used on the wire.
    pub method: HttpMethod,
    /// Verb the backend should act on, when it differs from `method`.
    pub intended_method: Option<HttpMethod>,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub fields: Vec<(String, String)>,
    pub file: Option<(String, FileUpload)>,
}

impl BackendRequest {
    pub fn to(route: PanelRoute) -> Self {
        let intended = route.intended_method();
        let (method, intended_method) = if route.overrides_method() {
            (HttpMethod::Post, Some(intended))
        } else {
            (intended, None)
        };
        Self {
            route_name: route.name(),
            method,
            intended_method,
            path: route.path(),
            query: Vec::new(),
            fields: Vec::new(),
            file: None,
        }
    }

    pub fn with_query(mut self, query: &FilterQuery) -> Self {
        self.query = query.pairs();
        self
    }

    /// Attach every draft field, empty ones included.
    pub fn with_draft(mut self, draft: &FormDraft) -> Self {
        self.fields = draft
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self
    }

    pub fn with_file(mut self, field: &str, file: Option<FileUpload>) -> Self {
        self.file = file.map(|f| (field.to_string(), f));
        self
    }

    /// Body fields as sent, including the verb override marker.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = self.fields.clone();
        if let Some(intended) = self.intended_method {
            fields.push((METHOD_OVERRIDE_FIELD.to_string(), intended.as_str().to_string()));
        }
        fields
    }

    pub fn is_multipart(&self) -> bool {
        self.file.is_some()
    }

    pub fn has_body(&self) -> bool {
        !self.form_fields().is_empty() || self.file.is_some()
    }
}
