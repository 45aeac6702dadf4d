//! Asynchronous account-plane client implementation.

use crate::models::{
    CreateServerRequest, CreateSnapshotRequest, CreateTokenRequest, Credentials, Organization,
    Server, ServerAction, Snapshot, Task, Token, UpdateSnapshotRequest, User,
};
use crate::Result;
use reqwest::Method;
use scaleway_core::client::{ApiClient, ApiClientBuilder};
use scaleway_core::config::{HttpConfig, DEFAULT_ACCOUNT_URL};
use scaleway_core::ids::{ServerId, SnapshotId, TokenId, UserId};
use scaleway_core::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

const USER_AGENT: &str = concat!("scaleway-account/", env!("CARGO_PKG_VERSION"));

/// Builder for [`AccountClient`].
#[derive(Debug, Clone)]
pub struct AccountClientBuilder {
    inner: ApiClientBuilder,
}

impl AccountClientBuilder {
    /// Create a builder for the specified base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let inner = ApiClientBuilder::new(base_url)?.with_user_agent(USER_AGENT);
        Ok(Self { inner })
    }

    /// Create a builder targeting the official account endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the default URL fails to parse.
    pub fn default_endpoint() -> Result<Self> {
        Self::new(DEFAULT_ACCOUNT_URL)
    }

    /// Set the auth token sent with every request.
    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.inner = self.inner.with_auth_token(token);
        self
    }

    /// Override the HTTP transport configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: HttpConfig) -> Self {
        self.inner = self.inner.with_http_config(config);
        self
    }

    /// Supply a pre-built [`reqwest::Client`].
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.inner = self.inner.with_http_client(client);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be constructed.
    pub fn build(self) -> Result<AccountClient> {
        let inner = self.inner.build()?;
        Ok(AccountClient { inner })
    }
}

/// Asynchronous client for the account plane: tokens, organizations, users,
/// servers, server actions, and snapshots.
#[derive(Debug, Clone)]
pub struct AccountClient {
    inner: ApiClient,
}

impl AccountClient {
    /// Construct a client directly from the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        AccountClientBuilder::new(base_url)?.build()
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.inner.base_url()
    }

    /// Return the current auth token, if any.
    #[must_use]
    pub fn auth_token(&self) -> Option<&str> {
        self.inner.auth_token()
    }

    /// Install or replace the auth token used for subsequent requests.
    pub fn set_auth_token(&mut self, token: impl Into<String>) {
        self.inner.set_auth_token(token);
    }

    // Tokens

    /// Obtain a new token from credentials.
    ///
    /// Token creation is the one operation that does not itself require a
    /// token.
    pub async fn create_token(&self, credentials: &Credentials, expires: bool) -> Result<Token> {
        let request = CreateTokenRequest {
            credentials: credentials.clone(),
            expires,
        };
        let envelope: TokenEnvelope = require(
            self.inner.send_json(Method::POST, "tokens", Some(&request)).await?,
            "token",
        )?;
        Ok(envelope.token)
    }

    /// List all tokens belonging to the authenticated user.
    pub async fn list_tokens(&self) -> Result<Vec<Token>> {
        let envelope: TokensEnvelope = require(
            self.inner.send_json::<(), _>(Method::GET, "tokens", None).await?,
            "tokens",
        )?;
        Ok(envelope.tokens)
    }

    /// Fetch a single token.
    pub async fn get_token(&self, id: TokenId) -> Result<Token> {
        let path = format!("tokens/{id}");
        let envelope: TokenEnvelope = require(
            self.inner.send_json::<(), _>(Method::GET, &path, None).await?,
            "token",
        )?;
        Ok(envelope.token)
    }

    /// Extend the expiry of an expiring token.
    ///
    /// The upstream API renews on a `PATCH` with an empty JSON object.
    pub async fn renew_token(&self, id: TokenId) -> Result<Token> {
        let path = format!("tokens/{id}");
        let body = serde_json::json!({});
        let envelope: TokenEnvelope = require(
            self.inner.send_json(Method::PATCH, &path, Some(&body)).await?,
            "token",
        )?;
        Ok(envelope.token)
    }

    /// Revoke a token.
    pub async fn delete_token(&self, id: TokenId) -> Result<()> {
        let path = format!("tokens/{id}");
        self.inner
            .send_json::<(), Value>(Method::DELETE, &path, None)
            .await
            .map(|_| ())
    }

    // Organizations

    /// List the organizations the authenticated user belongs to.
    pub async fn list_organizations(&self) -> Result<Vec<Organization>> {
        let envelope: OrganizationsEnvelope = require(
            self.inner
                .send_json::<(), _>(Method::GET, "organizations", None)
                .await?,
            "organizations",
        )?;
        Ok(envelope.organizations)
    }

    // Users

    /// Fetch a user profile.
    pub async fn get_user(&self, id: UserId) -> Result<User> {
        let path = format!("users/{id}");
        let envelope: UserEnvelope = require(
            self.inner.send_json::<(), _>(Method::GET, &path, None).await?,
            "user",
        )?;
        Ok(envelope.user)
    }

    // Servers

    /// Create a server.
    pub async fn create_server(&self, request: &CreateServerRequest) -> Result<Server> {
        let envelope: ServerEnvelope = require(
            self.inner.send_json(Method::POST, "servers", Some(request)).await?,
            "server",
        )?;
        Ok(envelope.server)
    }

    /// List all servers.
    pub async fn list_servers(&self) -> Result<Vec<Server>> {
        let envelope: ServersEnvelope = require(
            self.inner.send_json::<(), _>(Method::GET, "servers", None).await?,
            "servers",
        )?;
        Ok(envelope.servers)
    }

    /// Fetch a single server.
    pub async fn get_server(&self, id: ServerId) -> Result<Server> {
        let path = format!("servers/{id}");
        let envelope: ServerEnvelope = require(
            self.inner.send_json::<(), _>(Method::GET, &path, None).await?,
            "server",
        )?;
        Ok(envelope.server)
    }

    /// Delete a server.
    pub async fn delete_server(&self, id: ServerId) -> Result<()> {
        let path = format!("servers/{id}");
        self.inner
            .send_json::<(), Value>(Method::DELETE, &path, None)
            .await
            .map(|_| ())
    }

    // Server actions

    /// List the actions the server currently accepts.
    pub async fn list_server_actions(&self, id: ServerId) -> Result<Vec<String>> {
        let path = format!("servers/{id}/action");
        let envelope: ActionsEnvelope = require(
            self.inner.send_json::<(), _>(Method::GET, &path, None).await?,
            "actions",
        )?;
        Ok(envelope.actions)
    }

    /// Execute an action on a server, returning the spawned task.
    pub async fn execute_server_action(&self, id: ServerId, action: ServerAction) -> Result<Task> {
        let path = format!("servers/{id}/action");
        let request = ExecuteActionRequest { action };
        let envelope: TaskEnvelope = require(
            self.inner.send_json(Method::POST, &path, Some(&request)).await?,
            "task",
        )?;
        Ok(envelope.task)
    }

    // Snapshots

    /// Create a snapshot from a volume.
    pub async fn create_snapshot(&self, request: &CreateSnapshotRequest) -> Result<Snapshot> {
        let envelope: SnapshotEnvelope = require(
            self.inner.send_json(Method::POST, "snapshots", Some(request)).await?,
            "snapshot",
        )?;
        Ok(envelope.snapshot)
    }

    /// List all snapshots.
    pub async fn list_snapshots(&self) -> Result<Vec<Snapshot>> {
        let envelope: SnapshotsEnvelope = require(
            self.inner.send_json::<(), _>(Method::GET, "snapshots", None).await?,
            "snapshots",
        )?;
        Ok(envelope.snapshots)
    }

    /// Fetch a single snapshot.
    pub async fn get_snapshot(&self, id: SnapshotId) -> Result<Snapshot> {
        let path = format!("snapshots/{id}");
        let envelope: SnapshotEnvelope = require(
            self.inner.send_json::<(), _>(Method::GET, &path, None).await?,
            "snapshot",
        )?;
        Ok(envelope.snapshot)
    }

    /// Rename a snapshot.
    pub async fn update_snapshot(
        &self,
        id: SnapshotId,
        request: &UpdateSnapshotRequest,
    ) -> Result<Snapshot> {
        let path = format!("snapshots/{id}");
        let envelope: SnapshotEnvelope = require(
            self.inner.send_json(Method::PUT, &path, Some(request)).await?,
            "snapshot",
        )?;
        Ok(envelope.snapshot)
    }

    /// Delete a snapshot.
    pub async fn delete_snapshot(&self, id: SnapshotId) -> Result<()> {
        let path = format!("snapshots/{id}");
        self.inner
            .send_json::<(), Value>(Method::DELETE, &path, None)
            .await
            .map(|_| ())
    }
}

fn require<T>(payload: Option<T>, key: &'static str) -> Result<T> {
    payload.ok_or(Error::EmptyPayload(key))
}

#[derive(Serialize)]
struct ExecuteActionRequest {
    action: ServerAction,
}

#[derive(Deserialize)]
struct TokenEnvelope {
    token: Token,
}

#[derive(Deserialize)]
struct TokensEnvelope {
    tokens: Vec<Token>,
}

#[derive(Deserialize)]
struct OrganizationsEnvelope {
    organizations: Vec<Organization>,
}

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

#[derive(Deserialize)]
struct ServerEnvelope {
    server: Server,
}

#[derive(Deserialize)]
struct ServersEnvelope {
    servers: Vec<Server>,
}

#[derive(Deserialize)]
struct ActionsEnvelope {
    // The upstream service omits the list entirely when no action is
    // available.
    #[serde(default)]
    actions: Vec<String>,
}

#[derive(Deserialize)]
struct TaskEnvelope {
    task: Task,
}

#[derive(Deserialize)]
struct SnapshotEnvelope {
    snapshot: Snapshot,
}

#[derive(Deserialize)]
struct SnapshotsEnvelope {
    snapshots: Vec<Snapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use scaleway_core::ids::{ImageId, OrganizationId, VolumeId};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ORGANIZATION: &str = "000a115d-2852-4b0a-9ce8-47f1134ba95a";
    const TOKEN: &str = "654c95b0-2cf5-41a3-b3cc-733ffba4b4b7";

    fn test_client(server: &MockServer) -> AccountClient {
        AccountClientBuilder::new(server.uri())
            .unwrap()
            .with_auth_token(TOKEN)
            .build()
            .unwrap()
    }

    fn organization() -> OrganizationId {
        OrganizationId::parse_str(ORGANIZATION).unwrap()
    }

    fn timestamp(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn create_token_sends_flat_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tokens"))
            .and(body_json(json!({
                "email": "foo@bar.com",
                "password": "foobar",
                "expires": true
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "token": {
                    "creation_date": "2014-05-22T08:06:51.742826+00:00",
                    "expires": "2014-05-20T14:05:06.393875+00:00",
                    "id": TOKEN,
                    "inherits_user_perms": true,
                    "permissions": [],
                    "user_id": "5bea0358-db40-429e-bd82-953016a7e2e7"
                }
            })))
            .mount(&server)
            .await;

        let credentials = Credentials {
            email: "foo@bar.com".into(),
            password: "foobar".into(),
        };

        let client = AccountClient::new(server.uri()).unwrap();
        let token = client.create_token(&credentials, true).await.unwrap();

        assert_eq!(token.id.to_string(), TOKEN);
        assert_eq!(
            token.creation_date,
            Some(timestamp("2014-05-22T08:06:51.742826+00:00"))
        );
        assert_eq!(
            token.expires,
            Some(timestamp("2014-05-20T14:05:06.393875+00:00"))
        );
        assert_eq!(token.inherits_user_perms, Some(true));
        assert!(token.permissions.is_empty());
    }

    #[tokio::test]
    async fn renew_token_patches_empty_object() {
        let server = MockServer::start().await;
        let id = TokenId::parse_str(TOKEN).unwrap();

        Mock::given(method("PATCH"))
            .and(path(format!("/tokens/{id}").as_str()))
            .and(header("x-auth-token", TOKEN))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": {
                    "id": TOKEN,
                    "expires": "2014-05-22T11:18:07.786841+00:00",
                    "user_id": "5bea0358-db40-429e-bd82-953016a7e2e7"
                }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let token = client.renew_token(id).await.unwrap();
        assert_eq!(
            token.expires,
            Some(timestamp("2014-05-22T11:18:07.786841+00:00"))
        );
    }

    #[tokio::test]
    async fn delete_token_issues_one_delete() {
        let server = MockServer::start().await;
        let id = TokenId::parse_str(TOKEN).unwrap();

        Mock::given(method("DELETE"))
            .and(path(format!("/tokens/{id}").as_str()))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.delete_token(id).await.unwrap();
    }

    #[tokio::test]
    async fn list_tokens_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tokens"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tokens": [
                    {
                        "id": TOKEN,
                        "user_id": "5bea0358-db40-429e-bd82-953016a7e2e7",
                        "inherits_user_perms": true,
                        "permissions": []
                    }
                ]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let tokens = client.list_tokens().await.unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].id.to_string(), TOKEN);
    }

    #[tokio::test]
    async fn list_organizations_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/organizations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "organizations": [
                    {
                        "id": ORGANIZATION,
                        "name": "foo@bar.com"
                    }
                ]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let organizations = client.list_organizations().await.unwrap();
        assert_eq!(organizations.len(), 1);
        assert_eq!(organizations[0].id, organization());
        assert_eq!(organizations[0].name, "foo@bar.com");
        assert!(organizations[0].users.is_none());
    }

    #[tokio::test]
    async fn get_user_returns_profile() {
        let server = MockServer::start().await;
        let id = UserId::parse_str("59a98700-8622-4495-a11a-e1efbfac5972").unwrap();

        Mock::given(method("GET"))
            .and(path(format!("/users/{id}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": {
                    "id": id,
                    "email": "jsnow@got.com",
                    "firstname": "John",
                    "lastname": "Snow",
                    "fullname": "John Snow"
                }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let user = client.get_user(id).await.unwrap();
        assert_eq!(user.email, "jsnow@got.com");
        assert_eq!(user.firstname.as_deref(), Some("John"));
        assert_eq!(user.lastname.as_deref(), Some("Snow"));
    }

    #[tokio::test]
    async fn create_server_decodes_fixture_literals() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/servers"))
            .and(header("x-auth-token", TOKEN))
            .and(body_json(json!({
                "organization": ORGANIZATION,
                "name": "my_server",
                "image": "85917034-46b0-4cc5-8b48-f0a2245e357e",
                "tags": ["test", "www"]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "server": {
                    "id": "3cb18e2d-f4f7-48f7-b452-59b88ae8fc8c",
                    "name": "my_server",
                    "organization": ORGANIZATION,
                    "state": "running",
                    "tags": ["test", "www"],
                    "image": {
                        "id": "85917034-46b0-4cc5-8b48-f0a2245e357e",
                        "name": "archlinux working"
                    },
                    "volumes": {
                        "0": {
                            "id": "d9257116-6919-49b4-a420-dcfdff51fcb1",
                            "name": "vol simple snapshot",
                            "organization": ORGANIZATION,
                            "size": 10_000_000_000u64,
                            "volume_type": "l_ssd"
                        }
                    }
                }
            })))
            .mount(&server)
            .await;

        let request = CreateServerRequest {
            organization: organization(),
            name: "my_server".into(),
            image: ImageId::parse_str("85917034-46b0-4cc5-8b48-f0a2245e357e").unwrap(),
            tags: vec!["test".into(), "www".into()],
        };

        let client = test_client(&server);
        let created = client.create_server(&request).await.unwrap();

        assert_eq!(created.id.to_string(), "3cb18e2d-f4f7-48f7-b452-59b88ae8fc8c");
        assert_eq!(created.name, "my_server");
        assert_eq!(created.state.as_deref(), Some("running"));
        assert_eq!(
            created.tags,
            Some(vec!["test".to_string(), "www".to_string()])
        );

        let image = created.image.unwrap();
        assert_eq!(image.name, "archlinux working");
        assert!(image.arch.is_none());

        let volumes = created.volumes.unwrap();
        assert_eq!(volumes["0"].volume_type.as_deref(), Some("l_ssd"));
    }

    #[tokio::test]
    async fn get_server_returns_fixture_structure() {
        let server = MockServer::start().await;
        let id = ServerId::parse_str("3cb18e2d-f4f7-48f7-b452-59b88ae8fc8c").unwrap();

        Mock::given(method("GET"))
            .and(path(format!("/servers/{id}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "server": {
                    "id": id,
                    "name": "my_server",
                    "state": "running"
                }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let fetched = client.get_server(id).await.unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.state.as_deref(), Some("running"));
    }

    #[tokio::test]
    async fn delete_server_issues_one_delete() {
        let server = MockServer::start().await;
        let id = ServerId::parse_str("3cb18e2d-f4f7-48f7-b452-59b88ae8fc8c").unwrap();

        Mock::given(method("DELETE"))
            .and(path(format!("/servers/{id}").as_str()))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.delete_server(id).await.unwrap();
    }

    #[tokio::test]
    async fn execute_server_action_returns_task() {
        let server = MockServer::start().await;
        let id = ServerId::parse_str("741db378-6b87-46d4-a8c5-4e46a09ab1f8").unwrap();

        Mock::given(method("POST"))
            .and(path(format!("/servers/{id}/action").as_str()))
            .and(body_json(json!({"action": "poweroff"})))
            .respond_with(ResponseTemplate::new(202).set_body_json(json!({
                "task": {
                    "description": "server_poweroff",
                    "href_from": format!("/servers/{id}/action"),
                    "id": "a8a1775c-0dda-4f52-87b2-4e8101d68d6e",
                    "progress": "0",
                    "status": "pending"
                }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let task = client
            .execute_server_action(id, ServerAction::PowerOff)
            .await
            .unwrap();

        assert_eq!(task.id.to_string(), "a8a1775c-0dda-4f52-87b2-4e8101d68d6e");
        assert_eq!(task.description.as_deref(), Some("server_poweroff"));
        assert_eq!(task.progress.as_deref(), Some("0"));
        assert_eq!(task.status.as_deref(), Some("pending"));
    }

    #[tokio::test]
    async fn list_server_actions_returns_names() {
        let server = MockServer::start().await;
        let id = ServerId::parse_str("741db378-6b87-46d4-a8c5-4e46a09ab1f8").unwrap();

        Mock::given(method("GET"))
            .and(path(format!("/servers/{id}/action").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "actions": ["poweron", "poweroff", "reboot"]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let actions = client.list_server_actions(id).await.unwrap();
        assert_eq!(actions, vec!["poweron", "poweroff", "reboot"]);
    }

    #[tokio::test]
    async fn list_server_actions_tolerates_omitted_list() {
        let server = MockServer::start().await;
        let id = ServerId::parse_str("741db378-6b87-46d4-a8c5-4e46a09ab1f8").unwrap();

        // No action available: the list key is omitted entirely.
        Mock::given(method("GET"))
            .and(path(format!("/servers/{id}/action").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let actions = client.list_server_actions(id).await.unwrap();
        assert!(actions.is_empty());
    }

    #[tokio::test]
    async fn get_token_returns_fixture_structure() {
        let server = MockServer::start().await;
        let id = TokenId::parse_str(TOKEN).unwrap();

        Mock::given(method("GET"))
            .and(path(format!("/tokens/{id}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": {
                    "creation_date": "2014-05-22T08:06:51.742826+00:00",
                    "expires": "2014-05-20T14:05:06.393875+00:00",
                    "id": TOKEN,
                    "inherits_user_perms": true,
                    "permissions": [],
                    "user_id": "5bea0358-db40-429e-bd82-953016a7e2e7"
                }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let token = client.get_token(id).await.unwrap();
        assert_eq!(token.id, id);
        assert_eq!(
            token.user_id.map(|user| user.to_string()),
            Some("5bea0358-db40-429e-bd82-953016a7e2e7".to_string())
        );
        assert_eq!(
            token.creation_date,
            Some(timestamp("2014-05-22T08:06:51.742826+00:00"))
        );
    }

    #[tokio::test]
    async fn list_snapshots_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/snapshots"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "snapshots": [
                    {
                        "id": "f0361e7b-cbe4-4882-a999-945192b7171b",
                        "name": "snapshot-0-1",
                        "state": "snapshotting"
                    },
                    {
                        "id": "6f418e5f-b42d-4423-a0b5-349c74c454a4",
                        "name": "snapshot-0-2",
                        "state": "available"
                    }
                ]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let snapshots = client.list_snapshots().await.unwrap();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].name, "snapshot-0-1");
        assert_eq!(snapshots[1].state.as_deref(), Some("available"));
    }

    #[tokio::test]
    async fn get_snapshot_returns_fixture_structure() {
        let server = MockServer::start().await;
        let id = SnapshotId::parse_str("6f418e5f-b42d-4423-a0b5-349c74c454a4").unwrap();

        Mock::given(method("GET"))
            .and(path(format!("/snapshots/{id}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "snapshot": {
                    "id": id,
                    "name": "snapshot-0-2",
                    "creation_date": "2014-05-22T12:11:06.055998+00:00",
                    "size": 10_000_000_000u64,
                    "state": "available",
                    "volume_type": "l_ssd",
                    "base_volume": {
                        "id": "09a4184c-733b-43c8-99c3-f1dde30536fe",
                        "name": "vol simple snapshot"
                    }
                }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let snapshot = client.get_snapshot(id).await.unwrap();
        assert_eq!(snapshot.id, id);
        assert_eq!(snapshot.name, "snapshot-0-2");
        assert_eq!(
            snapshot.base_volume.unwrap().id.to_string(),
            "09a4184c-733b-43c8-99c3-f1dde30536fe"
        );
    }

    #[tokio::test]
    async fn create_snapshot_decodes_fixture_literals() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/snapshots"))
            .and(body_json(json!({
                "name": "snapshot-0-1",
                "organization": ORGANIZATION,
                "volume_id": "701a8946-ff9d-4579-95e3-1c2c2d0f892d"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "snapshot": {
                    "id": "f0361e7b-cbe4-4882-a999-945192b7171b",
                    "name": "snapshot-0-1",
                    "creation_date": "2014-05-22T12:10:05.596769+00:00",
                    "organization": ORGANIZATION,
                    "size": 10_000_000_000u64,
                    "state": "snapshotting",
                    "volume_type": "l_ssd",
                    "base_volume": {
                        "id": "701a8946-ff9d-4579-95e3-1c2c2d0f892d",
                        "name": "vol simple snapshot"
                    }
                }
            })))
            .mount(&server)
            .await;

        let request = CreateSnapshotRequest {
            name: "snapshot-0-1".into(),
            organization: organization(),
            volume_id: VolumeId::parse_str("701a8946-ff9d-4579-95e3-1c2c2d0f892d").unwrap(),
        };

        let client = test_client(&server);
        let snapshot = client.create_snapshot(&request).await.unwrap();

        assert_eq!(snapshot.id.to_string(), "f0361e7b-cbe4-4882-a999-945192b7171b");
        assert_eq!(snapshot.state.as_deref(), Some("snapshotting"));
        assert_eq!(snapshot.size, Some(10_000_000_000));
        assert_eq!(
            snapshot.creation_date,
            Some(timestamp("2014-05-22T12:10:05.596769+00:00"))
        );
    }

    #[tokio::test]
    async fn update_snapshot_puts_new_name() {
        let server = MockServer::start().await;
        let id = SnapshotId::parse_str("6f418e5f-b42d-4423-a0b5-349c74c454a4").unwrap();

        Mock::given(method("PUT"))
            .and(path(format!("/snapshots/{id}").as_str()))
            .and(body_json(json!({
                "name": "snapshot-0-2",
                "organization": ORGANIZATION
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "snapshot": {
                    "id": id,
                    "name": "snapshot-0-2",
                    "state": "available"
                }
            })))
            .mount(&server)
            .await;

        let request = UpdateSnapshotRequest {
            name: "snapshot-0-2".into(),
            organization: organization(),
        };

        let client = test_client(&server);
        let snapshot = client.update_snapshot(id, &request).await.unwrap();
        assert_eq!(snapshot.name, "snapshot-0-2");
    }

    #[tokio::test]
    async fn delete_snapshot_issues_one_delete() {
        let server = MockServer::start().await;
        let id = SnapshotId::parse_str("f0361e7b-cbe4-4882-a999-945192b7171b").unwrap();

        Mock::given(method("DELETE"))
            .and(path(format!("/snapshots/{id}").as_str()))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.delete_snapshot(id).await.unwrap();
    }

    #[tokio::test]
    async fn empty_body_on_required_payload_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/servers"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.list_servers().await.unwrap_err();
        assert_eq!(err, Error::EmptyPayload("servers"));
    }
}
