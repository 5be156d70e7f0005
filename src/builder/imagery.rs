// 3-D image routines: raw pixel storage and region-of-interest tagging

use log::debug;

use crate::assets;
use crate::config::ImageConfig;
use crate::error::VaultError;
use crate::model::{Block, DataArray, Dimension, MultiTag, SampledDimension};

/// Decode the reference bitmap and store its raw pixels as a 3-D array:
/// two unit-interval sampled axes (height, width) and a labeled channel
/// axis.
pub fn rgb_image(block: &mut Block, config: &ImageConfig) -> Result<(), VaultError> {
    let image = assets::load_reference_image(&config.file_name)?;
    debug!(
        "[Builder] Storing {}x{}x{} pixel block",
        image.height,
        image.width,
        image.channels.len()
    );

    let shape = image.shape();
    let channels = image.channels.clone();
    let pixels = DataArray::from_bytes("lena", "nix.image.rgb", shape, image.pixels)
        .with_dimension(SampledDimension::new(1.0).with_label("height"))
        .with_dimension(SampledDimension::new(1.0).with_label("width"))
        .with_dimension(Dimension::set(channels));
    block.data_arrays.push(pixels);

    Ok(())
}

/// Tag three fixed regions of interest inside the stored image. Positions
/// and extents are 3x3 arrays, one row per region, with bare set axes.
pub fn roi_multi_tag(block: &mut Block) -> Result<(), VaultError> {
    if block.data_array("lena").is_none() {
        return Err(VaultError::MissingEntity {
            kind: "data array",
            name: "lena".to_string(),
        });
    }

    let roi_starts = vec![
        250.0, 245.0, 0.0, //
        250.0, 315.0, 0.0, //
        340.0, 260.0, 0.0,
    ];
    let roi_extents = vec![
        30.0, 45.0, 3.0, //
        30.0, 40.0, 3.0, //
        25.0, 65.0, 3.0,
    ];

    let positions = DataArray::from_doubles("ROI positions", "nix.positions", vec![3, 3], roi_starts)
        .with_dimension(Dimension::set_empty())
        .with_dimension(Dimension::set_empty());
    block.data_arrays.push(positions);

    let extents = DataArray::from_doubles("ROI extents", "nix.extents", vec![3, 3], roi_extents)
        .with_dimension(Dimension::set_empty())
        .with_dimension(Dimension::set_empty());
    block.data_arrays.push(extents);

    block.multi_tags.push(
        MultiTag::new("Regions of interest", "nix.roi", "ROI positions")
            .with_extents("ROI extents")
            .with_reference("lena"),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built_block() -> Block {
        let mut block = Block::new("3D data", "nix.image_data");
        rgb_image(&mut block, &ImageConfig::default()).unwrap();
        roi_multi_tag(&mut block).unwrap();
        block
    }

    #[test]
    fn image_array_has_one_descriptor_per_axis() {
        let block = built_block();
        let image = block.data_array("lena").unwrap();
        assert_eq!(image.shape, vec![512, 512, 3]);
        assert_eq!(image.dimensions.len(), 3);
        image.validate().unwrap();
        match &image.dimensions[2] {
            Dimension::Set(d) => assert_eq!(d.labels, vec!["R", "G", "B"]),
            other => panic!("unexpected channel descriptor: {:?}", other),
        }
    }

    #[test]
    fn rois_stay_inside_the_image() {
        let block = built_block();
        let roi = block.multi_tag("Regions of interest").unwrap();
        roi.validate(&block).unwrap();
    }

    #[test]
    fn roi_tagging_requires_the_image() {
        let mut block = Block::new("3D data", "nix.image_data");
        assert!(matches!(
            roi_multi_tag(&mut block),
            Err(VaultError::MissingEntity { .. })
        ));
    }
}
