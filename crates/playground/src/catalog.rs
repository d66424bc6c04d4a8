//! Template catalog: example server/client snippet pairs
//!
//! Keyed by server framework, then client framework, then client
//! language. The catalog is immutable once built and shared with the
//! session through an `Arc`.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{PlaygroundError, Result};
use crate::parse::CallDescriptor;
use crate::{Arguments, Value};

/// One server framework's example.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerTemplate {
    /// Server snippet (Python)
    pub server: String,

    /// Client snippets: framework → language → snippet
    pub client: IndexMap<String, IndexMap<String, String>>,

    /// Request shown when the client snippet contains no call
    pub default_call: CallDescriptor,
}

impl ServerTemplate {
    /// Look up the client snippet for a framework and language.
    pub fn client_snippet(&self, framework: &str, language: &str) -> Option<&str> {
        self.client.get(framework)?.get(language).map(String::as_str)
    }
}

/// The full table of templates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TemplateCatalog {
    templates: IndexMap<String, ServerTemplate>,
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateCatalog {
    /// Build a catalog from named templates.
    pub fn new(templates: impl IntoIterator<Item = (String, ServerTemplate)>) -> Self {
        Self {
            templates: templates.into_iter().collect(),
        }
    }

    /// Load a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if the JSON does not describe a catalog
    /// or describes an empty one.
    pub fn from_json(text: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(text)
            .map_err(|e| PlaygroundError::InvalidCatalog(e.to_string()))?;
        if catalog.templates.is_empty() {
            return Err(PlaygroundError::InvalidCatalog("no templates".to_string()));
        }
        Ok(catalog)
    }

    /// Get a server template by name.
    pub fn get(&self, name: &str) -> Result<&ServerTemplate> {
        self.templates
            .get(name)
            .ok_or_else(|| PlaygroundError::UnknownTemplate(name.to_string()))
    }

    /// Server template names, in catalog order.
    pub fn server_names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    /// Client frameworks offered by a server template.
    pub fn client_frameworks(&self, server: &str) -> Result<Vec<&str>> {
        Ok(self.get(server)?.client.keys().map(String::as_str).collect())
    }

    /// Client languages offered for a framework.
    pub fn client_languages(&self, server: &str, framework: &str) -> Result<Vec<&str>> {
        let template = self.get(server)?;
        template
            .client
            .get(framework)
            .map(|langs| langs.keys().map(String::as_str).collect())
            .ok_or_else(|| PlaygroundError::UnknownClientFramework {
                template: server.to_string(),
                framework: framework.to_string(),
            })
    }

    /// Resolve a full selection to its `(server, client)` snippets.
    ///
    /// # Errors
    ///
    /// Names the first part of the selection that does not exist.
    pub fn snippets(&self, server: &str, framework: &str, language: &str) -> Result<(&str, &str)> {
        let template = self.get(server)?;
        let languages = template.client.get(framework).ok_or_else(|| {
            PlaygroundError::UnknownClientFramework {
                template: server.to_string(),
                framework: framework.to_string(),
            }
        })?;
        let client = languages
            .get(language)
            .ok_or_else(|| PlaygroundError::UnknownClientLanguage {
                framework: framework.to_string(),
                language: language.to_string(),
            })?;
        Ok((template.server.as_str(), client.as_str()))
    }

    /// The built-in examples: FastAPI, Flask and Django, each with React
    /// and NextJS clients in TypeScript and JavaScript.
    pub fn builtin() -> Self {
        Self::new([
            (
                "FastAPI".to_string(),
                builtin_template(
                    FASTAPI_SERVER,
                    "client.get_user(1)",
                    "user",
                    CallDescriptor::new("get_user", Arguments::named([("id", Value::Int(1))])),
                ),
            ),
            (
                "Flask".to_string(),
                builtin_template(
                    FLASK_SERVER,
                    "client.add(10, 5)",
                    "result",
                    CallDescriptor::new(
                        "add",
                        Arguments::named([("a", Value::Int(1)), ("b", Value::Int(2))]),
                    ),
                ),
            ),
            (
                "Django".to_string(),
                builtin_template(
                    DJANGO_SERVER,
                    "client.greet(\"pRPC\")",
                    "msg",
                    CallDescriptor::new(
                        "greet",
                        Arguments::named([("name", Value::string("pRPC"))]),
                    ),
                ),
            ),
        ])
    }
}

const FASTAPI_SERVER: &str = "from pydantic import BaseModel
from prpc import rpc

class User(BaseModel):
    id: int
    name: str

@rpc
async def get_user(id: int) -> User:
    return User(id=id, name=\"pRPC User\")";

const FLASK_SERVER: &str = "from prpc import rpc

@rpc
def add(a: int, b: int) -> int:
    return a + b";

const DJANGO_SERVER: &str = "from prpc import rpc

@rpc
def greet(name: str) -> str:
    return f\"Hello {name}\"";

/// Both client languages share a snippet; the typed and untyped variants
/// read the same for these one-liners.
fn builtin_template(server: &str, call: &str, binding: &str, default_call: CallDescriptor) -> ServerTemplate {
    let query_key = &default_call.procedure_name;
    let nextjs = format!(
        "export async function getServerSideProps() {{\n  const client = new PRPCClient(\"http://api.internal\");\n  const {binding} = await {call};\n  return {{ props: {{ {binding} }} }};\n}}"
    );
    let react = format!(
        "const {{ data: {binding} }} = useQuery(['{query_key}'], () => {call});"
    );

    let languages = |snippet: &str| -> IndexMap<String, String> {
        ["TypeScript", "JavaScript"]
            .into_iter()
            .map(|lang| (lang.to_string(), snippet.to_string()))
            .collect()
    };

    ServerTemplate {
        server: server.to_string(),
        client: IndexMap::from([
            ("NextJS".to_string(), languages(&nextjs)),
            ("React".to_string(), languages(&react)),
        ]),
        default_call,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_call;

    #[test]
    fn test_builtin_names() {
        let catalog = TemplateCatalog::builtin();
        assert_eq!(catalog.server_names(), vec!["FastAPI", "Flask", "Django"]);
        assert_eq!(catalog.client_frameworks("Flask").unwrap(), vec!["NextJS", "React"]);
        assert_eq!(
            catalog.client_languages("Flask", "React").unwrap(),
            vec!["TypeScript", "JavaScript"]
        );
    }

    #[test]
    fn test_builtin_react_snippet() {
        let catalog = TemplateCatalog::builtin();
        let (_, client) = catalog.snippets("FastAPI", "React", "TypeScript").unwrap();
        assert_eq!(
            client,
            "const { data: user } = useQuery(['get_user'], () => client.get_user(1));"
        );
    }

    #[test]
    fn test_every_builtin_client_parses() {
        let catalog = TemplateCatalog::builtin();
        for server in catalog.server_names() {
            let template = catalog.get(server).unwrap();
            for (framework, langs) in &template.client {
                for (lang, snippet) in langs {
                    let call = parse_call(snippet)
                        .unwrap_or_else(|| panic!("{server}/{framework}/{lang} has no call"));
                    assert_eq!(call.procedure_name, template.default_call.procedure_name);
                }
            }
        }
    }

    #[test]
    fn test_unknown_lookups() {
        let catalog = TemplateCatalog::builtin();
        assert_eq!(
            catalog.get("Rails").unwrap_err(),
            PlaygroundError::UnknownTemplate("Rails".to_string())
        );
        assert!(matches!(
            catalog.snippets("Flask", "Vue", "TypeScript"),
            Err(PlaygroundError::UnknownClientFramework { ref template, .. }) if template == "Flask"
        ));
        assert!(matches!(
            catalog.snippets("Flask", "React", "Elm"),
            Err(PlaygroundError::UnknownClientLanguage { .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "Tiny": {
                "server": "def ping():\n    return 'pong'",
                "client": { "Vanilla": { "JavaScript": "client.ping()" } },
                "default_call": { "procedure_name": "ping" }
            }
        }"#;
        let catalog = TemplateCatalog::from_json(json).unwrap();
        assert_eq!(catalog.server_names(), vec!["Tiny"]);
        assert_eq!(
            catalog.get("Tiny").unwrap().default_call.arguments,
            Arguments::Positional(vec![])
        );
        let tiny = catalog.get("Tiny").unwrap();
        assert_eq!(tiny.client_snippet("Vanilla", "JavaScript"), Some("client.ping()"));
        assert_eq!(tiny.client_snippet("Vanilla", "TypeScript"), None);
        assert!(TemplateCatalog::from_json("{}").is_err());
        assert!(TemplateCatalog::from_json("[").is_err());
    }
}
