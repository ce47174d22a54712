//! Connection templates
//!
//! One variant per engine connection method. Each variant owns a static
//! snippet listing its connection fields: required fields are written out,
//! optional ones are commented. Snippets are stored without indentation;
//! the document generator aligns them.

use quarry_core::ConfigError;

/// Connection method of a target engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionTemplate {
    /// Every BigQuery method, all commented out
    BigQueryChoose,
    BigQueryOauth,
    BigQueryOauthSecrets,
    BigQueryServiceAccountKeyfile,
    BigQueryServiceAccountJson,
    Databricks,
    DuckDb,
    MotherDuck,
    MySql,
    MsSql,
    Postgres,
    Redshift,
    Snowflake,
    Spark,
    Trino,
}

impl ConnectionTemplate {
    pub const ALL: [ConnectionTemplate; 15] = [
        Self::BigQueryChoose,
        Self::BigQueryOauth,
        Self::BigQueryOauthSecrets,
        Self::BigQueryServiceAccountKeyfile,
        Self::BigQueryServiceAccountJson,
        Self::Databricks,
        Self::DuckDb,
        Self::MotherDuck,
        Self::MySql,
        Self::MsSql,
        Self::Postgres,
        Self::Redshift,
        Self::Snowflake,
        Self::Spark,
        Self::Trino,
    ];

    /// Variant name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::BigQueryChoose => "bigquery",
            Self::BigQueryOauth => "bigquery_oauth",
            Self::BigQueryOauthSecrets => "bigquery_oauth_secrets",
            Self::BigQueryServiceAccountKeyfile => "bigquery_service_account_keyfile",
            Self::BigQueryServiceAccountJson => "bigquery_service_account_json",
            Self::Databricks => "databricks",
            Self::DuckDb => "duckdb",
            Self::MotherDuck => "motherduck",
            Self::MySql => "mysql",
            Self::MsSql => "mssql",
            Self::Postgres => "postgres",
            Self::Redshift => "redshift",
            Self::Snowflake => "snowflake",
            Self::Spark => "spark",
            Self::Trino => "trino",
        }
    }

    /// Look up a variant by exact name
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .iter()
            .copied()
            .find(|template| template.name() == name)
            .ok_or_else(|| ConfigError::UnknownConnection(name.to_string()))
    }

    /// Connection fields for this method
    pub fn snippet(&self) -> &'static str {
        match self {
            Self::BigQueryChoose => BIGQUERY_CHOOSE,
            Self::BigQueryOauth => BIGQUERY_OAUTH,
            Self::BigQueryOauthSecrets => BIGQUERY_OAUTH_SECRETS,
            Self::BigQueryServiceAccountKeyfile => BIGQUERY_SERVICE_ACCOUNT_KEYFILE,
            Self::BigQueryServiceAccountJson => BIGQUERY_SERVICE_ACCOUNT_JSON,
            Self::Databricks => DATABRICKS,
            Self::DuckDb => DUCKDB,
            Self::MotherDuck => MOTHERDUCK,
            Self::MySql => MYSQL,
            Self::MsSql => MSSQL,
            Self::Postgres => POSTGRES,
            Self::Redshift => REDSHIFT,
            Self::Snowflake => SNOWFLAKE,
            Self::Spark => SPARK,
            Self::Trino => TRINO,
        }
    }
}

const BIGQUERY_CHOOSE: &str = r#"
# Please uncomment and configure one of the following four methods
#
# Method 1
#
#type: bigquery
#method: oauth
##scopes: <The scopes used to obtain authorization, specified as a list>
#
# Method 2
#
#type: bigquery
#method: oauth-secrets
##token: <Can be None if refresh information is provided.>
##refresh_token: <If specified, credentials can be refreshed.>
##client_id: <Must be specified for refresh, can be left as None if the token can not be refreshed.>
##client_secret: <Must be specified for refresh, can be left as None if the token can not be refreshed.>
##token_uri: <Must be specified for refresh, can be left as None if the token can not be refreshed.>
##scopes: <OAuth 2.0 credentials can not request additional scopes after authorization. The scopes must be derivable from the refresh token if refresh information is provided (e.g. The refresh token scopes are a superset of this or contain a wild card scope like 'https://www.googleapis.com/auth/any-api')>
#
# Method 3
#
#type: bigquery
#method: service-account
#keyfile: <Path to the keyfile>
##scopes: <The scopes used to obtain authorization, specified as a list>
#
# Method 4
#
#type: bigquery
#method: service-account-json
#keyfile_json: <Keyfile information provided inline (not recommended)>
##scopes: <The scopes used to obtain authorization, specified as a list>
"#;

const BIGQUERY_OAUTH: &str = r#"
type: bigquery
method: oauth
#scopes: <The scopes used to obtain authorization, specified as a list>
"#;

const BIGQUERY_OAUTH_SECRETS: &str = r#"
type: bigquery
method: oauth-secrets
#token: <Can be None if refresh information is provided.>
#refresh_token: <If specified, credentials can be refreshed.>
#client_id: <Must be specified for refresh, can be left as None if the token can not be refreshed.>
#client_secret: <Must be specified for refresh, can be left as None if the token can not be refreshed.>
#token_uri: <Must be specified for refresh, can be left as None if the token can not be refreshed.>
#scopes: <OAuth 2.0 credentials can not request additional scopes after authorization. The scopes must be derivable from the refresh token if refresh information is provided (e.g. The refresh token scopes are a superset of this or contain a wild card scope like 'https://www.googleapis.com/auth/any-api')>
"#;

const BIGQUERY_SERVICE_ACCOUNT_KEYFILE: &str = r#"
type: bigquery
method: service-account
keyfile: <Path to the keyfile>
#scopes: <The scopes used to obtain authorization, specified as a list>
"#;

const BIGQUERY_SERVICE_ACCOUNT_JSON: &str = r#"
type: bigquery
method: service-account-json
keyfile_json: <Keyfile information provided inline (not recommended)>
#scopes: <The scopes used to obtain authorization, specified as a list>
"#;

const DATABRICKS: &str = r#"
type: databricks
#server_hostname: <Databricks instance host name>
#http_path: <HTTP path, either to a DBSQL endpoint (such as /sql/1.0/endpoints/1234567890abcdef) or to an All-Purpose cluster (such as /sql/protocolv1/o/1234567890123456/1234-123456-slid123)>
#access_token: <HTTP Bearer access token, such as Databricks Personal Access Token>
#catalog: <Spark 3.4+ Only if not using SQL Connector. The name of the catalog to use for the connection. Defaults to use Databricks cluster default. (string)>
#http_headers: <SQL Connector Only: An optional dictionary of HTTP headers that will be set on every request>
#session_configuration: <SQL Connector Only: An optional dictionary of Spark session parameters. Execute the SQL command SET -v to get a full list of available commands.>
#databricks_connect_server_hostname: <Databricks Connect Only: Databricks Connect server hostname. Uses server_hostname if not set.>
#databricks_connect_access_token: <Databricks Connect Only: Databricks Connect access token. Uses access_token if not set.>
#databricks_connect_cluster_id: <Databricks Connect Only: Databricks Connect cluster ID. Uses http_path if not set. Cannot be a Databricks SQL Warehouse.>
#force_databricks_connect: <When running locally, a bool to force the use of Databricks Connect for all model operations (so don't use SQL Connector for SQL models)>
#disable_databricks_connect: <When running locally, a bool to disable the use of Databricks Connect for all model operations (so use SQL Connector for all models) (bool)>
#disable_spark_session: <When running in a notebook, a bool to specify not to use SparkSession if it is available>
"#;

const DUCKDB: &str = r#"
type: duckdb
#database: <The optional database name. If not specified, the in-memory database is used. Cannot be defined if using catalogs.>
#catalogs: <Mapping to define multiple catalogs. Can attach DuckDB catalogs or catalogs for other connections. First entry is the default catalog. Cannot be defined if using database.>
#extensions: <Extension to load into duckdb. Only autoloadable extensions are supported. Note: specified as a list>
#connector_config: <Configuration to pass into the duckdb connector, specified as a dict>
"#;

const MOTHERDUCK: &str = r#"
type: motherduck
database: <The database name.>
#token: <The optional MotherDuck token. If not specified, the user will be prompted to login with their web browser.>
#extensions: <Extension to load into duckdb. Only autoloadable extensions are supported. Note: specified as a list>
#connector_config: <Configuration to pass into the duckdb connector, specified as a dict>
"#;

const MYSQL: &str = r#"
type: mysql
host: <The hostname of the MySQL server>
user: <The username to use for authentication with the MySQL server>
password: <The password to use for authentication with the MySQL server>
#port: <The port number of the MySQL server>
#charset: <The character set used for the connection>
#ssl_disabled: <Is SSL disabled>
"#;

const MSSQL: &str = r#"
type: mssql
host: <The hostname of the MSSQL server>
#user: <The username to use for authentication with the MSSQL server>
#password: <The password to use for authentication with the MSSQL server>
#port: <The port number of the MSSQL server>
#database: <The target database>
#charset: <The character set used for the connection>
#timeout: <The query timeout in seconds. Default: no timeout>
#login_timeout: <The timeout for connection and login in seconds. Default: 60>
#appname: <The application name to use for the connection>
#conn_properties: <The list of connection properties>
#autocommit: <Is autocommit mode enabled. Default: false>
"#;

const POSTGRES: &str = r#"
# Please uncomment and configure one of the following, depending on whether using GCP
#
# Postgres standard config
#
#type: postgres
#host: <The hostname of the Postgres server>
#user: <The username to use for authentication with the Postgres server>
#password: <The password to use for authentication with the Postgres server>
#port: <The port number of the Postgres server>
#database: <The name of the database to connect to>
##keepalives_idle: <The number of seconds between each keepalive packet sent to the server.>
##connect_timeout: <The number of seconds to wait for the connection to the server. (Default: 10)>
##role: <The role to use for authentication with the Postgres server>
##sslmode: <The security of the connection to the Postgres server>
#
# GCP Postgres config
#
#type: postgres
#instance_connection_str: <Connection name for the postgres instance>
#user: <The username (postgres or IAM) to use for authentication>
##password: <The password to use for authentication. Required when connecting as a Postgres user>
##enable_iam_auth: <Enables IAM authentication. Required when connecting as an IAM user>
#db: <The name of the database instance to connect to>
"#;

const REDSHIFT: &str = r#"
type: redshift
#user: <The username to use for authentication with the Amazon Redshift cluster>
#password: <The password to use for authentication with the Amazon Redshift cluster>
#database: <The name of the database instance to connect to>
#host: <The hostname of the Amazon Redshift cluster>
#port: 5439
#ssl: <Is SSL enabled. SSL must be enabled when authenticating using IAM (Default: True)>
#sslmode: <The security of the connection to the Amazon Redshift cluster. verify-ca and verify-full are supported.>
#timeout: <The number of seconds before the connection to the server will timeout.>
#tcp_keepalive: <Is TCP keepalive used. (Default: True)>
#application_name: <The name of the application>
#preferred_role: <The IAM role preferred for the current connection>
#principal_arn: <The ARN of the IAM entity (user or role) for which you are generating a policy>
#credentials_provider: <The class name of the IdP that will be used for authenticating with the Amazon Redshift cluster>
#region: <The AWS region of the Amazon Redshift cluster>
#cluster_identifier: <The cluster identifier of the Amazon Redshift cluster>
#iam: <If IAM authentication is enabled. IAM must be True when authenticating using an IdP. Note: specified as a dict>
#is_serverless: <If the Amazon Redshift cluster is serverless (Default: False)>
#serverless_acct_id: <The account ID of the serverless cluster>
#serverless_work_group: <The name of work group for serverless end point>
"#;

const SNOWFLAKE: &str = r#"
type: snowflake
#user: <The Snowflake username>
#password: <The Snowflake password>
#authenticator: <The Snowflake authenticator method>
account: <The Snowflake account name>
#warehouse: <The Snowflake warehouse name>
#database: <The Snowflake database name>
#role: <The Snowflake role name>
#token: <The Snowflake OAuth 2.0 access token>
#private_key: <The optional private key to use for authentication. Key can be Base64-encoded DER format (representing the key bytes), a plain-text PEM format, or bytes (Python config only).>
#private_key_path: <The optional path to the private key to use for authentication. This would be used instead of private_key.>
#private_key_passphrase: <The optional passphrase to use to decrypt private_key (if in PEM format) or private_key_path. Keys can be created without encryption so only provide this if needed.>
"#;

const SPARK: &str = r#"
type: spark
#config_dir: <Value to set for SPARK_CONFIG_DIR>
#catalog: <The catalog to use when issuing commands. See Catalog Support for details>
#config: <Key/value pairs to set for the Spark Configuration, specified as a dict.>
"#;

const TRINO: &str = r#"
type: trino
user: <The username (of the account) to log in to your cluster. When connecting to Starburst Galaxy clusters, you must include the role of the user as a suffix to the username.>
host: <The hostname of your cluster. Don't include the http:// or https:// prefix.>
catalog: <The name of a catalog in your cluster.>
http_scheme: <The HTTP scheme to use when connecting to your cluster. By default, it's https and can only be http for no-auth or basic auth.>
port: <The port to connect to your cluster. By default, it's 443 for https scheme and 80 for http>
roles: <Mapping of catalog name to a role, specified as a dict>
http_headers: <Additional HTTP headers to send with each request, specified as a dict.>
session_properties: <Trino session properties. Run SHOW SESSION to see all options. Note: specified as a dict>
retries: <Number of retries to attempt when a request fails. Default: 3>
timezone: <Timezone to use for the connection. Default: client-side local timezone>
"#;
