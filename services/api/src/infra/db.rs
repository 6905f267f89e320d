use anyhow::Context as _;
use futures::TryStreamExt as _;
use mongodb::{
    Client, Collection, Database,
    bson::{Bson, doc, oid::ObjectId},
    options::{ClientOptions, ServerApi, ServerApiVersion},
    results::{DeleteResult, InsertOneResult, UpdateResult},
};
use tracing::info;

use crate::domain::repository::{
    ApartmentRepository, ReservationRepository, Store, UserRepository,
};
use crate::domain::types::{
    Apartment, DeleteAck, InsertAck, Reservation, UpdateAck, User, UserRole,
};
use crate::error::ApiError;

pub const USERS: &str = "users";
pub const APARTMENTS: &str = "apartments";
pub const RESERVATIONS: &str = "reservation";

/// Build a client pinned to Stable API v1 and confirm the deployment answers a ping.
pub async fn connect(uri: &str, db_name: &str) -> anyhow::Result<Database> {
    let mut options = ClientOptions::parse(uri)
        .await
        .context("parse MongoDB connection string")?;
    options.server_api = Some(
        ServerApi::builder()
            .version(ServerApiVersion::V1)
            .strict(true)
            .deprecation_errors(true)
            .build(),
    );
    let client = Client::with_options(options).context("build MongoDB client")?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .context("ping MongoDB deployment")?;
    info!("pinged deployment, connected to MongoDB");

    Ok(client.database(db_name))
}

// ── Store ────────────────────────────────────────────────────────────────────

/// MongoDB-backed [`Store`]. Cloning shares the driver's connection pool.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl Store for MongoStore {
    type Users = MongoUserRepository;
    type Apartments = MongoApartmentRepository;
    type Reservations = MongoReservationRepository;

    fn users(&self) -> MongoUserRepository {
        MongoUserRepository::new(&self.db)
    }

    fn apartments(&self) -> MongoApartmentRepository {
        MongoApartmentRepository::new(&self.db)
    }

    fn reservations(&self) -> MongoReservationRepository {
        MongoReservationRepository::new(&self.db)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .context("ping MongoDB")?;
        Ok(())
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MongoUserRepository {
    pub collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(USERS),
        }
    }
}

impl UserRepository for MongoUserRepository {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        let cursor = self.collection.find(doc! {}).await.context("find users")?;
        let users: Vec<User> = cursor.try_collect().await.context("read users")?;
        Ok(users)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let user = self
            .collection
            .find_one(doc! { "email": email })
            .await
            .context("find user by email")?;
        Ok(user)
    }

    async fn insert(&self, user: &User) -> Result<InsertAck, ApiError> {
        let result = self
            .collection
            .insert_one(user)
            .await
            .context("insert user")?;
        Ok(insert_ack(result))
    }

    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, ApiError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .context("delete user")?;
        Ok(delete_ack(result))
    }

    async fn set_role(&self, id: ObjectId, role: UserRole) -> Result<UpdateAck, ApiError> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "role": role.as_str() } })
            .await
            .context("update user role")?;
        Ok(update_ack(result))
    }
}

// ── Apartment repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MongoApartmentRepository {
    pub collection: Collection<Apartment>,
}

impl MongoApartmentRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(APARTMENTS),
        }
    }
}

impl ApartmentRepository for MongoApartmentRepository {
    async fn list(&self) -> Result<Vec<Apartment>, ApiError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .context("find apartments")?;
        let apartments: Vec<Apartment> = cursor.try_collect().await.context("read apartments")?;
        Ok(apartments)
    }
}

// ── Reservation repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct MongoReservationRepository {
    pub collection: Collection<Reservation>,
}

impl MongoReservationRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(RESERVATIONS),
        }
    }
}

impl ReservationRepository for MongoReservationRepository {
    async fn list(&self) -> Result<Vec<Reservation>, ApiError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .context("find reservations")?;
        let reservations: Vec<Reservation> =
            cursor.try_collect().await.context("read reservations")?;
        Ok(reservations)
    }

    async fn find_by_email(&self, email: &Bson) -> Result<Option<Reservation>, ApiError> {
        let reservation = self
            .collection
            .find_one(doc! { "email": email.clone() })
            .await
            .context("find reservation by email")?;
        Ok(reservation)
    }

    async fn insert(&self, reservation: &Reservation) -> Result<InsertAck, ApiError> {
        let result = self
            .collection
            .insert_one(reservation)
            .await
            .context("insert reservation")?;
        Ok(insert_ack(result))
    }

    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, ApiError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .context("delete reservation")?;
        Ok(delete_ack(result))
    }
}

// ── Acknowledgement mapping ──────────────────────────────────────────────────

fn id_hex(id: &Bson) -> Option<String> {
    match id {
        Bson::ObjectId(oid) => Some(oid.to_hex()),
        Bson::Null => None,
        other => Some(other.to_string()),
    }
}

fn insert_ack(result: InsertOneResult) -> InsertAck {
    InsertAck {
        acknowledged: true,
        inserted_id: id_hex(&result.inserted_id),
    }
}

fn delete_ack(result: DeleteResult) -> DeleteAck {
    DeleteAck {
        acknowledged: true,
        deleted_count: result.deleted_count,
    }
}

fn update_ack(result: UpdateResult) -> UpdateAck {
    let upserted_id = result.upserted_id.as_ref().and_then(id_hex);
    UpdateAck {
        acknowledged: true,
        matched_count: result.matched_count,
        modified_count: result.modified_count,
        upserted_count: u64::from(upserted_id.is_some()),
        upserted_id,
    }
}
