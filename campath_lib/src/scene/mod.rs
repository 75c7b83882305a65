/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

//! Scene description document, the handoff format of paths and intrinsics.
//!
//! ```json
//! {
//!     "vid_width": 800,
//!     "vid_height": 800,
//!     "intrinsic_matrix": [[fx, 0, cx], [0, fy, cy], [0, 0, 1]],
//!     "frames": [{ "extrinsic_matrix": [[...], [...], [...], [0, 0, 0, 1]], "file_path": "..." }]
//! }
//! ```
//!
//! Extrinsic matrices are camera-to-world, rows first.

use std::io::{Read, Write};

use log::{debug, warn};
use nalgebra::{Matrix3, Matrix4};
use serde::{Deserialize, Serialize};

use crate::{
    camera::{CameraPath, Intrinsics, Pose},
    error::{CamPathError, Result},
};

#[derive(Debug, Serialize, Deserialize)]
struct SceneFile {
    vid_width: usize,
    vid_height: usize,
    intrinsic_matrix: Vec<Vec<f32>>,
    frames: Vec<FrameEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct FrameEntry {
    extrinsic_matrix: Vec<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file_path: Option<String>,
}

fn format_err(msg: impl Into<String>) -> CamPathError {
    CamPathError::SceneFormat(msg.into())
}

/// Camera path and intrinsics, with optional image per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDescription {
    path: CameraPath,
    intrinsics: Intrinsics,
    file_paths: Vec<Option<String>>,
}

impl SceneDescription {
    /// Scene without associated images
    pub fn new(path: CameraPath, intrinsics: Intrinsics) -> SceneDescription {
        let file_paths = vec![None; path.len()];
        SceneDescription {
            path,
            intrinsics,
            file_paths,
        }
    }

    /// Associate images with frames, one entry per frame
    pub fn with_file_paths(
        path: CameraPath,
        intrinsics: Intrinsics,
        file_paths: Vec<Option<String>>,
    ) -> Result<SceneDescription> {
        if file_paths.len() != path.len() {
            return Err(CamPathError::InvalidConfiguration(format!(
                "{} file paths for {} frames",
                file_paths.len(),
                path.len()
            )));
        }
        Ok(SceneDescription {
            path,
            intrinsics,
            file_paths,
        })
    }

    pub fn path(&self) -> &CameraPath {
        &self.path
    }

    pub fn intrinsics(&self) -> &Intrinsics {
        &self.intrinsics
    }

    pub fn file_paths(&self) -> &[Option<String>] {
        &self.file_paths
    }

    pub fn into_parts(self) -> (CameraPath, Intrinsics) {
        (self.path, self.intrinsics)
    }

    fn to_file(&self) -> SceneFile {
        let k = self.intrinsics.matrix();
        let intrinsic_matrix = (0..3)
            .map(|r| (0..3).map(|c| k[(r, c)]).collect())
            .collect();

        let frames = self
            .path
            .iter()
            .zip(self.file_paths.iter())
            .map(|(pose, file_path)| FrameEntry {
                extrinsic_matrix: pose.to_rows().iter().map(|row| row.to_vec()).collect(),
                file_path: file_path.clone(),
            })
            .collect();

        SceneFile {
            vid_width: self.intrinsics.width(),
            vid_height: self.intrinsics.height(),
            intrinsic_matrix,
            frames,
        }
    }

    fn from_file(file: SceneFile) -> Result<SceneDescription> {
        let k = parse_intrinsic(&file.intrinsic_matrix)?;
        if k[(0, 1)] != 0.0 {
            warn!("Intrinsic matrix skew {} is ignored", k[(0, 1)]);
        }
        let intrinsics = Intrinsics::from_matrix(&k, file.vid_width, file.vid_height)
            .map_err(|e| format_err(format!("intrinsics: {e}")))?;

        let mut poses = Vec::with_capacity(file.frames.len());
        let mut file_paths = Vec::with_capacity(file.frames.len());
        for (i, frame) in file.frames.into_iter().enumerate() {
            let matrix = parse_extrinsic(i, &frame.extrinsic_matrix)?;
            let pose =
                Pose::from_matrix(matrix).map_err(|e| format_err(format!("frame {i}: {e}")))?;
            poses.push(pose);
            file_paths.push(frame.file_path);
        }

        debug!(
            "Parsed scene: {} frames, {}x{}",
            poses.len(),
            intrinsics.width(),
            intrinsics.height()
        );

        Ok(SceneDescription {
            path: CameraPath::new(poses),
            intrinsics,
            file_paths,
        })
    }

    /// Serialize into pretty printed JSON, indented by 4 spaces
    pub fn to_json(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.to_writer(&mut buffer)?;
        // serde_json only emits valid UTF-8
        String::from_utf8(buffer).map_err(|e| format_err(e.to_string()))
    }

    /// Serialize into `writer`, see [`SceneDescription::to_json`]
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.to_file().serialize(&mut serializer)?;
        Ok(())
    }

    /// Parse scene document
    pub fn from_json(json: &str) -> Result<SceneDescription> {
        let file: SceneFile = serde_json::from_str(json)?;
        SceneDescription::from_file(file)
    }

    /// Parse scene document from `reader`
    pub fn from_reader<R: Read>(reader: R) -> Result<SceneDescription> {
        let file: SceneFile = serde_json::from_reader(reader)?;
        SceneDescription::from_file(file)
    }
}

fn parse_intrinsic(rows: &[Vec<f32>]) -> Result<Matrix3<f32>> {
    if rows.len() != 3 || rows.iter().any(|row| row.len() != 3) {
        return Err(format_err("intrinsic_matrix must be 3x3"));
    }
    Ok(Matrix3::from_fn(|r, c| rows[r][c]))
}

/// Accepts 4x4 matrices and 3x4 matrices without the bottom row
fn parse_extrinsic(frame: usize, rows: &[Vec<f32>]) -> Result<Matrix4<f32>> {
    if rows.iter().any(|row| row.len() != 4) {
        return Err(format_err(format!(
            "frame {frame}: extrinsic_matrix rows must have 4 columns"
        )));
    }
    match rows.len() {
        4 => Ok(Matrix4::from_fn(|r, c| rows[r][c])),
        3 => {
            debug!("frame {frame}: 3x4 extrinsic_matrix, adding bottom row");
            Ok(Matrix4::from_fn(|r, c| match r {
                3 => {
                    if c == 3 {
                        1.0
                    } else {
                        0.0
                    }
                }
                _ => rows[r][c],
            }))
        }
        n => Err(format_err(format!(
            "frame {frame}: extrinsic_matrix has {n} rows, expected 3 or 4"
        ))),
    }
}
