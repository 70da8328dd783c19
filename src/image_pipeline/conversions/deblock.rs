use tracing::{error, info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    conversions::types::{DeblockConfig, DeblockReport},
    engine::{plan_layout, run_engine, DeblockEngine, PassthroughEngine},
    planes,
    raster::{format, ImageFormat, PixelGrid},
};

#[cfg(costella_unblock)]
use crate::image_pipeline::engine::CostellaEngine;

pub struct DeblockPipeline<E: DeblockEngine> {
    engine: E,
    engine_log: Box<dyn Write>,
    config: DeblockConfig,
}

impl DeblockPipeline<PassthroughEngine> {
    pub fn new(config: DeblockConfig) -> Self {
        Self {
            engine: PassthroughEngine::new(),
            engine_log: Box::new(std::io::stdout()),
            config,
        }
    }
}

#[cfg(costella_unblock)]
impl DeblockPipeline<CostellaEngine> {
    pub fn native(config: DeblockConfig) -> Self {
        Self {
            engine: CostellaEngine::new(),
            engine_log: Box::new(std::io::stdout()),
            config,
        }
    }
}

impl<E: DeblockEngine> DeblockPipeline<E> {
    pub fn with_custom(engine: E, engine_log: Box<dyn Write>, config: DeblockConfig) -> Self {
        Self {
            engine,
            engine_log,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        if !self.config.validate_dimensions {
            return Ok(());
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Image dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(ConversionError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Removes block artifacts from `image` in place.
    ///
    /// Engine failure is not an error: the pixels are rewritten from the
    /// planes regardless and the report carries `engine_succeeded == false`.
    #[instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    pub fn deblock<G: PixelGrid + ?Sized>(&mut self, image: &mut G) -> Result<DeblockReport> {
        let (width, height) = (image.width(), image.height());

        let plan = {
            let _span = tracing::info_span!("validate_dimensions").entered();
            self.validate_dimensions(width, height)?;
            plan_layout(width, self.engine.block_size(), self.config.alignment)?
        };

        let mut samples = {
            let _span = tracing::info_span!("marshal_forward", row_stride = plan.row_stride).entered();
            planes::extract(&*image, plan.row_stride)?
        };

        let engine_succeeded = {
            let _span = tracing::info_span!("deblock").entered();
            run_engine(
                &mut self.engine,
                &mut *self.engine_log,
                &mut samples,
                self.config.planes,
                self.config.chroma_sampling,
            )?
        };

        {
            let _span = tracing::info_span!("marshal_inverse").entered();
            planes::reinsert(samples, image)?;
        }

        Ok(DeblockReport {
            width,
            height,
            padded_columns: plan.padded_columns,
            engine_succeeded,
        })
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(
        &mut self,
        input_data: &[u8],
        input_format: ImageFormat,
        output: &mut dyn Write,
        output_format: ImageFormat,
    ) -> Result<DeblockReport> {
        info!("Starting deblocking conversion");

        let mut image = {
            let _span = tracing::info_span!("decode", format = ?input_format).entered();
            input_format.reader().read_image(input_data)?
        };

        let report = self.deblock(&mut image)?;

        {
            let _span = tracing::info_span!("encode", format = ?output_format).entered();
            output_format
                .writer(self.config.png_compression)
                .write_image(&image, output)?;
        }

        if report.engine_succeeded {
            info!(
                width = report.width,
                height = report.height,
                "Conversion complete"
            );
        } else {
            error!(
                width = report.width,
                height = report.height,
                "Conversion complete, but artifact removal failed"
            );
        }
        Ok(report)
    }

    /// Decodes by the input extension and encodes by the output extension.
    ///
    /// The output file is only created once the image has been encoded, so
    /// fatal errors leave no partial output behind.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        input_path: P,
        output_path: Q,
    ) -> Result<DeblockReport> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        if !format::extensions_match(input_path, output_path) {
            warn!(
                "Filenames {} and {} have different extensions",
                input_path.display(),
                output_path.display()
            );
        }

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut encoded = Vec::new();
        let report = self.convert(
            &input_data,
            ImageFormat::from_path(input_path),
            &mut encoded,
            ImageFormat::from_path(output_path),
        )?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(report)
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &DeblockConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DeblockConfig) {
        self.config = config;
    }
}
