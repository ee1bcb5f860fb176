//! CI pipeline for the selected provider.

use goscaff_core::domain::{CiProvider, Database, ProjectConfig, RenderContext};

const GITHUB: &str = r#"name: CI

on:
  push:
    branches: [ main, develop ]
  pull_request:
    branches: [ main, develop ]

jobs:
  test:
    name: Test
    runs-on: ubuntu-latest
{{SERVICES}}
    steps:
      - name: Checkout code
        uses: actions/checkout@v4

      - name: Set up Go
        uses: actions/setup-go@v5
        with:
          go-version: '{{GO_VERSION}}'

      - name: Cache Go modules
        uses: actions/cache@v3
        with:
          path: ~/go/pkg/mod
          key: ${{ runner.os }}-go-${{ hashFiles('**/go.sum') }}
          restore-keys: |
            ${{ runner.os }}-go-

      - name: Download dependencies
        run: go mod download

      - name: Run tests
        run: go test -v -race -coverprofile=coverage.out ./...

      - name: Upload coverage
        uses: codecov/codecov-action@v3
        with:
          files: ./coverage.out

  lint:
    name: Lint
    runs-on: ubuntu-latest

    steps:
      - name: Checkout code
        uses: actions/checkout@v4

      - name: Set up Go
        uses: actions/setup-go@v5
        with:
          go-version: '{{GO_VERSION}}'

      - name: Run golangci-lint
        uses: golangci/golangci-lint-action@v3
        with:
          version: latest

  build:
    name: Build
    runs-on: ubuntu-latest
    needs: [test, lint]

    steps:
      - name: Checkout code
        uses: actions/checkout@v4

      - name: Set up Go
        uses: actions/setup-go@v5
        with:
          go-version: '{{GO_VERSION}}'

      - name: Build
        run: go build -v ./cmd/{{PROJECT_NAME}}
"#;

const GITLAB: &str = r#"stages:
  - test
  - build

variables:
  GO_VERSION: "{{GO_VERSION}}"

test:
  stage: test
  image: golang:${GO_VERSION}
{{SERVICES}}
  before_script:
    - go mod download

  script:
    - go test -v -race -coverprofile=coverage.out ./...
    - go tool cover -func=coverage.out

  coverage: '/total:\s+\(statements\)\s+(\d+\.\d+%)/'

  artifacts:
    paths:
      - coverage.out

lint:
  stage: test
  image: golangci/golangci-lint:latest

  script:
    - golangci-lint run

build:
  stage: build
  image: golang:${GO_VERSION}

  dependencies:
    - test

  before_script:
    - go mod download

  script:
    - go build -v -o {{PROJECT_NAME}} ./cmd/{{PROJECT_NAME}}

  artifacts:
    paths:
      - {{PROJECT_NAME}}
"#;

fn github_service(db: Database) -> &'static str {
    match db {
        Database::Postgres => {
            r#"      postgres:
        image: postgres:16-alpine
        env:
          POSTGRES_USER: user
          POSTGRES_PASSWORD: password
          POSTGRES_DB: testdb
        ports:
          - 5432:5432
        options: >-
          --health-cmd pg_isready
          --health-interval 10s
          --health-timeout 5s
          --health-retries 5
"#
        }
        Database::MySql => {
            r#"      mysql:
        image: mysql:8
        env:
          MYSQL_ROOT_PASSWORD: password
          MYSQL_DATABASE: testdb
        ports:
          - 3306:3306
        options: >-
          --health-cmd="mysqladmin ping"
          --health-interval=10s
          --health-timeout=5s
          --health-retries=3
"#
        }
        Database::MongoDb => {
            r#"      mongodb:
        image: mongo:7
        ports:
          - 27017:27017
"#
        }
        Database::Redis => {
            r#"      redis:
        image: redis:7-alpine
        ports:
          - 6379:6379
        options: >-
          --health-cmd "redis-cli ping"
          --health-interval 10s
          --health-timeout 5s
          --health-retries 5
"#
        }
    }
}

fn gitlab_image(db: Database) -> &'static str {
    match db {
        Database::Postgres => "postgres:16-alpine",
        Database::MySql => "mysql:8",
        Database::MongoDb => "mongo:7",
        Database::Redis => "redis:7-alpine",
    }
}

/// Path and content of the pipeline, or `None` without a provider.
pub(crate) fn render(config: &ProjectConfig, ctx: &RenderContext) -> Option<(&'static str, String)> {
    let provider = config.ci()?;
    let dbs = config.databases();

    let (path, template, services) = match provider {
        CiProvider::GitHub => {
            let mut services = String::new();
            if !dbs.is_empty() {
                services.push_str("\n    services:\n");
                for db in dbs {
                    services.push_str(github_service(*db));
                }
            }
            (".github/workflows/ci.yml", GITHUB, services)
        }
        CiProvider::GitLab => {
            let mut services = String::new();
            if !dbs.is_empty() {
                services.push_str("\n  services:\n");
                for db in dbs {
                    services.push_str(&format!("    - {}\n", gitlab_image(*db)));
                }
            }
            (".gitlab-ci.yml", GITLAB, services)
        }
    };

    let content = ctx.clone().with_variable("SERVICES", services).render(template);
    Some((path, content))
}
