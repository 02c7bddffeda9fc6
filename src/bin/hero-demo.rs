//! Lists projects and creates a contact against the HERO API.
//!
//! Reads the API key from `hero_api_key.pem` in the working directory.

use std::process::ExitCode;

use hero_graphql::{response, ClientConfig, GraphqlClient, HERO_ENDPOINT};
use serde_json::Value;

const CREDENTIAL_PATH: &str = "hero_api_key.pem";

const PROJECTS_QUERY: &str = r"
query {
  project_matches {
    id
    project_nr
    measure {
      short
      name
    }
    customer {
      id
      first_name
      last_name
      email
    }
    contact {
      id
      first_name
      last_name
      email
    }
    address {
      street
      city
      zipcode
    }
    current_project_match_status {
      status_code
      name
    }
  }
}
";

const CREATE_CONTACT_MUTATION: &str = r#"
mutation {
  create_contact(
    contact: {
      first_name: "Max"
      last_name: "Mustermann"
      email: "max.mustermann@example.org"
      source: "Website"
      address: {
        street: "Göttinger Hof 9"
        city: "Hannover"
        zipcode: "30453"
      }
    }
  ) {
    id
  }
}
"#;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).init();

    let config = match ClientConfig::builder()
        .endpoint(HERO_ENDPOINT)
        .credential_path(CREDENTIAL_PATH)
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let client = match GraphqlClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(
                "API key could not be read from the provided .pem file: {e}: {}",
                e.kind
            );
            return ExitCode::FAILURE;
        }
    };

    let projects = client.execute_query(PROJECTS_QUERY, None).await;
    println!("\n--- All Projects (project_matches) ---");
    for line in project_report(projects.as_ref()) {
        println!("{line}");
    }

    let created = client
        .execute_mutation(CREATE_CONTACT_MUTATION, None)
        .await;
    println!("\n--- Create Contact (Mutation) ---");
    for line in contact_report(created.as_ref()) {
        println!("{line}");
    }

    ExitCode::SUCCESS
}

fn project_report(body: Option<&Value>) -> Vec<String> {
    let Some(body) = body else {
        return vec!["Failed to retrieve projects.".to_string()];
    };

    let mut lines = vec![format!("Full response: {body}")];
    match response::data_field(body, "project_matches") {
        Some(matches) if !is_empty(matches) => lines.push(format!("Projects Data: {matches}")),
        _ => lines.push("No project data found or 'project_matches' is empty.".to_string()),
    }
    lines
}

fn contact_report(body: Option<&Value>) -> Vec<String> {
    let Some(body) = body else {
        return vec!["Failed to create a contact.".to_string()];
    };

    let mut lines = vec![format!("Full mutation response: {body}")];
    if response::has_errors(body) {
        lines.push("\nGraphQL Errors:".to_string());
        lines.extend(
            response::errors(body)
                .unwrap_or_default()
                .iter()
                .map(ToString::to_string),
        );
    } else if let Some(contact) = response::data_field(body, "create_contact") {
        lines.push("\nSuccessfully created contact!".to_string());
        let id = contact.get("id").unwrap_or(&Value::Null);
        lines.push(format!("Contact ID: {id}"));
    } else {
        lines.push("\nNo 'data' field found in the response.".to_string());
    }
    lines
}

/// Only empty arrays and objects count as "no data".
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}
