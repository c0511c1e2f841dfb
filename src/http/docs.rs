//! Machine-readable description of the note endpoints, served at
//! `/api-docs`. Descriptive only; nothing here drives routing.

use axum::Json;
use serde_json::{json, Value};

/// `GET /api-docs`
pub async fn api_docs() -> Json<Value> {
    Json(describe())
}

fn describe() -> Value {
    let name_param = json!([{
        "name": "noteName",
        "in": "path",
        "required": true,
        "schema": { "type": "string" }
    }]);

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "notes-server",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "CRUD over plain-text notes stored as files"
        },
        "paths": {
            "/notes": {
                "get": {
                    "summary": "List every note with its content",
                    "responses": {
                        "200": {
                            "description": "All notes",
                            "content": { "application/json": { "schema": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Note" }
                            }}}
                        }
                    }
                }
            },
            "/notes/{noteName}": {
                "get": {
                    "summary": "Read one note",
                    "parameters": name_param.clone(),
                    "responses": {
                        "200": { "description": "Note content as plain text" },
                        "404": { "description": "Note not found" }
                    }
                },
                "put": {
                    "summary": "Replace an existing note",
                    "parameters": name_param.clone(),
                    "requestBody": { "content": { "application/x-www-form-urlencoded": { "schema": {
                        "type": "object",
                        "required": ["noteContent"],
                        "properties": { "noteContent": { "type": "string" } }
                    }}}},
                    "responses": {
                        "200": { "description": "Note updated" },
                        "404": { "description": "Note does not exist" }
                    }
                },
                "delete": {
                    "summary": "Delete a note",
                    "parameters": name_param.clone(),
                    "responses": {
                        "200": { "description": "Note deleted" },
                        "404": { "description": "Note does not exist" }
                    }
                }
            },
            "/write": {
                "post": {
                    "summary": "Create a new note",
                    "requestBody": { "content": { "application/x-www-form-urlencoded": { "schema": {
                        "type": "object",
                        "required": ["note_name", "note"],
                        "properties": {
                            "note_name": { "type": "string" },
                            "note": { "type": "string" }
                        }
                    }}}},
                    "responses": {
                        "201": { "description": "Note created" },
                        "400": { "description": "Note already exists" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Note": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "text": { "type": "string" }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_note_route() {
        let doc = describe();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths["/notes"]["get"].is_object());
        for verb in ["get", "put", "delete"] {
            assert!(paths["/notes/{noteName}"][verb].is_object(), "missing {verb}");
        }
        assert!(paths["/write"]["post"].is_object());
    }
}
