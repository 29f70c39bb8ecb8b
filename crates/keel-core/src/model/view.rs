use super::Model;
use crate::{Result, View};

impl Model {
    /// Returns an independent copy of this model with `view` applied. The
    /// source model is left untouched.
    pub fn copy(&self, view: &View) -> Result<Model> {
        let mut model = self.clone();
        model.materialize(view)?;
        Ok(model)
    }

    /// Applies `view` to every field in place.
    ///
    /// * `origin` keeps all values.
    /// * `meta` resets every value to its default: nil for optional fields,
    ///   a fresh zero instance otherwise.
    /// * A named view resets fields outside the view. Fields inside the view
    ///   keep their data, or get a zero instance when they are empty.
    ///
    /// Applying the same view twice yields the same values.
    pub fn materialize(&mut self, view: &View) -> Result<()> {
        if view.is_origin() {
            return Ok(());
        }

        for field in self.fields.values_mut() {
            let enabled = field.spec().enable_view(view);
            let value = field.value_mut();

            if view.is_meta() || !enabled {
                value.reset_default()?;
            } else if value.is_zero() {
                value.reset_zero()?;
            }
        }

        Ok(())
    }
}
