//! Database and cache clients. Connection strings always come from the
//! resolver placeholders.

use goscaff_core::domain::{Database, RenderContext};

const POSTGRES: &str = r#"package database

import (
	"context"
	"fmt"

	"github.com/jackc/pgx/v5/pgxpool"

	"{{MODULE_PATH}}/internal/config"
)

type PostgresDB struct {
	pool *pgxpool.Pool
}

func NewPostgresDB(ctx context.Context, cfg *config.Config) (*PostgresDB, error) {
	pool, err := pgxpool.New(ctx, {{CFG_POSTGRES_URL}})
	if err != nil {
		return nil, fmt.Errorf("failed to create connection pool: %w", err)
	}

	if err := pool.Ping(ctx); err != nil {
		pool.Close()
		return nil, fmt.Errorf("failed to ping database: %w", err)
	}

	return &PostgresDB{pool: pool}, nil
}

func (db *PostgresDB) Ping(ctx context.Context) error {
	return db.pool.Ping(ctx)
}

func (db *PostgresDB) Close() {
	if db.pool != nil {
		db.pool.Close()
	}
}

func (db *PostgresDB) Pool() *pgxpool.Pool {
	return db.pool
}
"#;

const MYSQL: &str = r#"package database

import (
	"context"
	"database/sql"
	"fmt"
	"time"

	_ "github.com/go-sql-driver/mysql"

	"{{MODULE_PATH}}/internal/config"
)

type MySQLDB struct {
	db *sql.DB
}

func NewMySQLDB(ctx context.Context, cfg *config.Config) (*MySQLDB, error) {
	db, err := sql.Open("mysql", {{CFG_MYSQL_URL}})
	if err != nil {
		return nil, fmt.Errorf("failed to open database: %w", err)
	}

	db.SetMaxOpenConns(25)
	db.SetMaxIdleConns(5)
	db.SetConnMaxLifetime(5 * time.Minute)

	if err := db.PingContext(ctx); err != nil {
		_ = db.Close()
		return nil, fmt.Errorf("failed to ping database: %w", err)
	}

	return &MySQLDB{db: db}, nil
}

func (db *MySQLDB) Ping(ctx context.Context) error {
	return db.db.PingContext(ctx)
}

func (db *MySQLDB) Close() error {
	if db.db != nil {
		return db.db.Close()
	}
	return nil
}

func (db *MySQLDB) DB() *sql.DB {
	return db.db
}
"#;

const MONGODB: &str = r#"package database

import (
	"context"
	"fmt"
	"time"

	"go.mongodb.org/mongo-driver/mongo"
	"go.mongodb.org/mongo-driver/mongo/options"

	"{{MODULE_PATH}}/internal/config"
)

type MongoDB struct {
	client *mongo.Client
}

func NewMongoDB(ctx context.Context, cfg *config.Config) (*MongoDB, error) {
	clientOptions := options.Client().ApplyURI({{CFG_MONGO_URL}})

	ctx, cancel := context.WithTimeout(ctx, 10*time.Second)
	defer cancel()

	client, err := mongo.Connect(ctx, clientOptions)
	if err != nil {
		return nil, fmt.Errorf("failed to connect to MongoDB: %w", err)
	}

	if err := client.Ping(ctx, nil); err != nil {
		return nil, fmt.Errorf("failed to ping MongoDB: %w", err)
	}

	return &MongoDB{client: client}, nil
}

func (db *MongoDB) Ping(ctx context.Context) error {
	return db.client.Ping(ctx, nil)
}

func (db *MongoDB) Close(ctx context.Context) error {
	if db.client != nil {
		return db.client.Disconnect(ctx)
	}
	return nil
}

func (db *MongoDB) Client() *mongo.Client {
	return db.client
}

func (db *MongoDB) Database(name string) *mongo.Database {
	return db.client.Database(name)
}
"#;

const REDIS: &str = r#"package cache

import (
	"context"
	"fmt"

	"github.com/redis/go-redis/v9"

	"{{MODULE_PATH}}/internal/config"
)

type RedisCache struct {
	client *redis.Client
}

func NewRedisCache(ctx context.Context, cfg *config.Config) (*RedisCache, error) {
	opts, err := redis.ParseURL({{CFG_REDIS_URL}})
	if err != nil {
		return nil, fmt.Errorf("failed to parse Redis URL: %w", err)
	}

	client := redis.NewClient(opts)

	if err := client.Ping(ctx).Err(); err != nil {
		return nil, fmt.Errorf("failed to ping Redis: %w", err)
	}

	return &RedisCache{client: client}, nil
}

func (c *RedisCache) Close() error {
	if c.client != nil {
		return c.client.Close()
	}
	return nil
}

func (c *RedisCache) Client() *redis.Client {
	return c.client
}
"#;

/// Relative path and content of the client for `db`.
pub(crate) fn render(db: Database, ctx: &RenderContext) -> (&'static str, String) {
    let (path, template) = match db {
        Database::Postgres => ("internal/database/postgres.go", POSTGRES),
        Database::MySql => ("internal/database/mysql.go", MYSQL),
        Database::MongoDb => ("internal/database/mongodb.go", MONGODB),
        Database::Redis => ("internal/cache/redis.go", REDIS),
    };
    (path, ctx.render(template))
}

#[cfg(test)]
mod tests {
    use super::*;
    use goscaff_core::domain::{ConfigFormat, ProjectConfig};

    fn ctx(format: ConfigFormat) -> RenderContext {
        let config = ProjectConfig::builder("svc")
            .config_format(format)
            .databases(Database::ALL)
            .build()
            .unwrap();
        RenderContext::for_project(&config)
    }

    #[test]
    fn structured_formats_call_accessors() {
        let ctx = ctx(ConfigFormat::Json);

        let (path, pg) = render(Database::Postgres, &ctx);
        assert_eq!(path, "internal/database/postgres.go");
        assert!(pg.contains("pgxpool.New(ctx, cfg.GetPostgresURL())"));

        let (_, mysql) = render(Database::MySql, &ctx);
        assert!(mysql.contains("sql.Open(\"mysql\", cfg.GetMySQLURL())"));

        let (_, mongo) = render(Database::MongoDb, &ctx);
        assert!(mongo.contains("options.Client().ApplyURI(cfg.GetMongoURL())"));

        let (path, redis) = render(Database::Redis, &ctx);
        assert_eq!(path, "internal/cache/redis.go");
        assert!(redis.contains("redis.ParseURL(cfg.GetRedisURL())"));
    }

    #[test]
    fn env_format_reads_fields() {
        let ctx = ctx(ConfigFormat::Env);

        assert!(render(Database::Postgres, &ctx).1.contains("pgxpool.New(ctx, cfg.PostgresURL)"));
        assert!(render(Database::Redis, &ctx).1.contains("redis.ParseURL(cfg.RedisURL)"));
        assert!(render(Database::MySql, &ctx)
            .1
            .contains("\"github.com/user/svc/internal/config\""));
    }
}
