// routes/qrcode.rs
// GET /qrcode -> returns a PNG QR code of the otpauth URL.

use std::io::Cursor;
use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    body::Body,
    extract::State,
    response::Response,
};
use image::{ImageFormat, Luma};
use qrcode::QrCode;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::SeedStore;
use crate::totp::build_totp;

/// Builds and returns a PNG QR code so clients can scan and enroll.
pub async fn qrcode(State(st): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let seed = st.store.load()?.ok_or(ApiError::NotProvisioned)?;
    let totp = build_totp(&st.issuer, &st.account, &seed)?;
    let url = totp.get_url();

    let code = QrCode::new(url.as_bytes()).map_err(|e| ApiError::Internal(e.into()))?;
    let img = code.render::<Luma<u8>>().min_dimensions(200, 200).build();

    // image 0.25: write_to requires Write + Seek -> Cursor<Vec<u8>>
    let mut cursor = Cursor::new(Vec::<u8>::new());
    image::DynamicImage::ImageLuma8(img)
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|e| ApiError::Internal(e.into()))?;

    Response::builder()
        .header("Content-Type", "image/png")
        .body(Body::from(cursor.into_inner()))
        .map_err(|e| ApiError::Internal(anyhow!(e)))
}
